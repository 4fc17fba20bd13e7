use super::{split_chars, Rule, RULE_ALGORITHM};
use crate::divided_name::DividedName;
use crate::error::NdResult;
use regex::Regex;

/// Splits names mixing kanji with kana (or other scripts) at the script change.
///
/// A change only counts once two consecutive characters differ from the first
/// character's class: family names such as 井ノ原 or 関ヶ原 carry a single
/// kana inside. A name whose only kanji is its last character takes that kanji
/// as the given name (ながつま昭).
#[derive(Debug, Clone)]
pub struct KanjiKanaRule {
    kanji: Regex,
}

impl KanjiKanaRule {
    pub fn new() -> NdResult<Self> {
        Ok(Self {
            kanji: Regex::new(r"^\p{Script=Han}$")?,
        })
    }

    pub fn is_kanji(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.kanji.is_match(c.encode_utf8(&mut buf))
    }
}

impl Rule for KanjiKanaRule {
    fn try_divide(&self, undivided_name: &str, separator: &str) -> Option<DividedName> {
        let chars: Vec<char> = undivided_name.chars().collect();
        let is_kanji: Vec<bool> = chars.iter().map(|&c| self.is_kanji(c)).collect();

        for i in 2..is_kanji.len() {
            if is_kanji[0] != is_kanji[i] && is_kanji[i - 1] == is_kanji[i] {
                let (family, given) = split_chars(&chars, i - 1);
                return Some(DividedName::by_rule(family, given, separator, RULE_ALGORITHM));
            }
        }

        let kanji_count = is_kanji.iter().filter(|&&k| k).count();
        if kanji_count == 1 && is_kanji.last() == Some(&true) {
            let (family, given) = split_chars(&chars, chars.len() - 1);
            return Some(DividedName::by_rule(family, given, separator, RULE_ALGORITHM));
        }

        None
    }
}
