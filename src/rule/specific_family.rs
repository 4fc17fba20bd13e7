use super::{split_chars, Rule};
use crate::divided_name::DividedName;
use crate::error::NdResult;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const SPECIFIC_FAMILY_ALGORITHM: &str = "rule_specific_family";

/// Names starting with a listed family name are split right after it.
/// When several listed names match, the longest wins.
#[derive(Debug, Clone, Default)]
pub struct SpecificFamilyNameRule {
    family_names: HashSet<String>,
}

impl SpecificFamilyNameRule {
    pub fn new<I, S>(family_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            family_names: family_names.into_iter().map(Into::into).collect(),
        }
    }

    /// One family name per line; blank lines are ignored.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NdResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(
            content.lines().map(str::trim).filter(|l| !l.is_empty()),
        ))
    }
}

impl Rule for SpecificFamilyNameRule {
    fn try_divide(&self, undivided_name: &str, separator: &str) -> Option<DividedName> {
        let chars: Vec<char> = undivided_name.chars().collect();
        for family_len in (1..chars.len()).rev() {
            let (family, given) = split_chars(&chars, family_len);
            if self.family_names.contains(&family) {
                return Some(DividedName::by_rule(
                    family,
                    given,
                    separator,
                    SPECIFIC_FAMILY_ALGORITHM,
                ));
            }
        }
        None
    }
}
