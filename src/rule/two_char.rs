use super::{Rule, RULE_ALGORITHM};
use crate::divided_name::DividedName;

/// A two-character name is always one family character and one given character.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoCharRule;

impl Rule for TwoCharRule {
    fn try_divide(&self, undivided_name: &str, separator: &str) -> Option<DividedName> {
        let mut chars = undivided_name.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(family), Some(given), None) => Some(DividedName::by_rule(
                family.to_string(),
                given.to_string(),
                separator,
                RULE_ALGORITHM,
            )),
            _ => None,
        }
    }
}
