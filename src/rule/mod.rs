//! Cheap deterministic rules tried before any statistical scoring.

pub mod kanji_kana;
pub mod specific_family;
pub mod specific_given;
pub mod two_char;

pub use self::kanji_kana::KanjiKanaRule;
pub use self::specific_family::SpecificFamilyNameRule;
pub use self::specific_given::SpecificGivenNameRule;
pub use self::two_char::TwoCharRule;

use crate::divided_name::DividedName;
use crate::error::NdResult;
use std::sync::Arc;
use tracing::debug;

/// Algorithm tag of the built-in rules.
pub const RULE_ALGORITHM: &str = "rule";

/// A rule either settles the split outright or declines with `None`.
pub trait Rule: Send + Sync {
    fn try_divide(&self, undivided_name: &str, separator: &str) -> Option<DividedName>;
}

/// Ordered rules; the first match wins.
///
/// [`TwoCharRule`] and [`KanjiKanaRule`] always run first, custom rules follow
/// in the order supplied.
pub struct Pipeline {
    separator: String,
    rules: Vec<Arc<dyn Rule>>,
}

impl Pipeline {
    pub fn new(separator: &str, custom_rules: Vec<Arc<dyn Rule>>) -> NdResult<Self> {
        let mut rules: Vec<Arc<dyn Rule>> =
            vec![Arc::new(TwoCharRule), Arc::new(KanjiKanaRule::new()?)];
        rules.extend(custom_rules);
        Ok(Self {
            separator: separator.to_string(),
            rules,
        })
    }

    pub fn apply(&self, undivided_name: &str) -> Option<DividedName> {
        for (idx, rule) in self.rules.iter().enumerate() {
            if let Some(divided) = rule.try_divide(undivided_name, &self.separator) {
                debug!("Rule #{} matched '{}' -> {}", idx, undivided_name, divided);
                return Some(divided);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Splits `chars` after `family_len` characters.
pub(crate) fn split_chars(chars: &[char], family_len: usize) -> (String, String) {
    let (family, given) = chars.split_at(family_len);
    (family.iter().collect(), given.iter().collect())
}
