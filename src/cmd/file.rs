use super::read_lines;
use clap::Args;
use namedivider::config::DividerArgs;
use namedivider::error::NdResult;
use namedivider::NameDivider;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Text file with one undivided name per line
    pub path: PathBuf,

    #[command(flatten)]
    pub divider: DividerArgs,

    /// Encoding of the text file
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,

    /// Print one JSON object per line
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &FileArgs, divider: &NameDivider) -> NdResult<()> {
    let names = read_lines(&args.path, &args.encoding)?;
    info!("📂 Dividing {} names from {:?}", names.len(), args.path);

    for (line, result) in divider.divide_names(&names).into_iter().enumerate() {
        match result {
            Ok(divided) if args.json => println!("{}", serde_json::to_string(&divided)?),
            Ok(divided) => println!("{}", divided),
            Err(e) => eprintln!("⚠️  Line {}: {}", line + 1, e),
        }
    }
    Ok(())
}
