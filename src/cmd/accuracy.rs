use super::read_lines;
use crate::reports::{self, Miss};
use clap::Args;
use namedivider::config::DividerArgs;
use namedivider::error::{NameDividerError, NdResult};
use namedivider::NameDivider;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AccuracyArgs {
    /// Text file with one divided name per line
    pub path: PathBuf,

    #[command(flatten)]
    pub divider: DividerArgs,

    /// Encoding of the text file
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,
}

pub fn run(args: &AccuracyArgs, divider: &NameDivider) -> NdResult<()> {
    let expected = read_lines(&args.path, &args.encoding)?;
    if expected.is_empty() {
        return Err(NameDividerError::Validation(format!(
            "No names found in {:?}",
            args.path
        )));
    }

    let undivided: Vec<String> = expected
        .iter()
        .map(|name| name.replace(divider.separator(), ""))
        .collect();
    let predictions = divider.divide_names(&undivided);

    let mut misses = Vec::new();
    for (truth, prediction) in expected.iter().zip(predictions) {
        match prediction {
            Ok(divided) if divided.to_string() == *truth => {}
            Ok(divided) => misses.push(Miss {
                expected: truth.clone(),
                predicted: divided.to_string(),
                score: Some(divided.score),
                algorithm: divided.algorithm,
            }),
            Err(e) => misses.push(Miss {
                expected: truth.clone(),
                predicted: e.to_string(),
                score: None,
                algorithm: "-".to_string(),
            }),
        }
    }

    reports::print_accuracy_report(expected.len(), &misses);
    Ok(())
}
