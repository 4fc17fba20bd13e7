use clap::Args;
use namedivider::config::DividerArgs;
use namedivider::error::NdResult;
use namedivider::NameDivider;

#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// Undivided name
    pub undivided_name: String,

    #[command(flatten)]
    pub divider: DividerArgs,

    /// Print the full result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &NameArgs, divider: &NameDivider) -> NdResult<()> {
    let divided = divider.divide_name(&args.undivided_name)?;
    if args.json {
        println!("{}", serde_json::to_string(&divided)?);
    } else {
        println!("{}", divided);
    }
    Ok(())
}
