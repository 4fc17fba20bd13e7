use super::{split_chars, Rule};
use crate::divided_name::DividedName;
use crate::error::NdResult;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const SPECIFIC_GIVEN_ALGORITHM: &str = "rule_specific_given";

/// Names ending with a listed given name are split right before it.
/// When several listed names match, the longest wins.
#[derive(Debug, Clone, Default)]
pub struct SpecificGivenNameRule {
    given_names: HashSet<String>,
}

impl SpecificGivenNameRule {
    pub fn new<I, S>(given_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            given_names: given_names.into_iter().map(Into::into).collect(),
        }
    }

    /// One given name per line; blank lines are ignored.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NdResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(
            content.lines().map(str::trim).filter(|l| !l.is_empty()),
        ))
    }
}

impl Rule for SpecificGivenNameRule {
    fn try_divide(&self, undivided_name: &str, separator: &str) -> Option<DividedName> {
        let chars: Vec<char> = undivided_name.chars().collect();
        for family_len in 1..chars.len() {
            let (family, given) = split_chars(&chars, family_len);
            if self.given_names.contains(&given) {
                return Some(DividedName::by_rule(
                    family,
                    given,
                    separator,
                    SPECIFIC_GIVEN_ALGORITHM,
                ));
            }
        }
        None
    }
}
