use serde::{Deserialize, Serialize};
use std::fmt;

/// A full name split into its family and given parts.
///
/// `score` is the confidence of the split in `[0, 1]` and `algorithm` names
/// what produced it ("rule", "kanji_feature", "gbdt", ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DividedName {
    pub family: String,
    pub given: String,
    pub separator: String,
    pub score: f64,
    pub algorithm: String,
}

impl DividedName {
    pub fn new(
        family: impl Into<String>,
        given: impl Into<String>,
        separator: impl Into<String>,
        score: f64,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            separator: separator.into(),
            score,
            algorithm: algorithm.into(),
        }
    }

    /// Split produced by a rule: full confidence.
    pub fn by_rule(
        family: impl Into<String>,
        given: impl Into<String>,
        separator: &str,
        algorithm: &str,
    ) -> Self {
        Self::new(family, given, separator, 1.0, algorithm)
    }

    /// Number of characters (not bytes) in the family part.
    pub fn family_char_len(&self) -> usize {
        self.family.chars().count()
    }
}

impl fmt::Display for DividedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.family, self.separator, self.given)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_separator() {
        let name = DividedName::new("菅", "義偉", "/", 0.5, "kanji_feature");
        assert_eq!(name.to_string(), "菅/義偉");
    }

    #[test]
    fn test_serializes_all_fields() {
        let name = DividedName::by_rule("原", "敬", " ", "rule");
        let json = serde_json::to_value(&name).unwrap();
        assert_eq!(json["family"], "原");
        assert_eq!(json["given"], "敬");
        assert_eq!(json["separator"], " ");
        assert_eq!(json["score"], 1.0);
        assert_eq!(json["algorithm"], "rule");
    }
}
