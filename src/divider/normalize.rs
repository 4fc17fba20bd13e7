use crate::divided_name::DividedName;

/// Old or variant kanji forms and their standard forms.
pub const VARIANT_FORMS: [(char, char); 2] = [('髙', '高'), ('𠮷', '吉')];

pub fn normalize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            VARIANT_FORMS
                .iter()
                .find(|(variant, _)| *variant == c)
                .map_or(c, |&(_, standard)| standard)
        })
        .collect()
}

/// Keeps the caller's spelling next to the normalized one the divider works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndividedName {
    original: String,
    normalized: String,
}

impl UndividedName {
    pub fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            normalized: normalize_name(original),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn was_normalized(&self) -> bool {
        self.original != self.normalized
    }

    /// Re-cuts the original spelling at the boundary found on the normalized one.
    /// Every mapping is one char to one char, so character counts line up.
    pub fn restore(&self, divided: DividedName) -> DividedName {
        if !self.was_normalized() {
            return divided;
        }
        let family_len = divided.family_char_len();
        let family: String = self.original.chars().take(family_len).collect();
        let given: String = self.original.chars().skip(family_len).collect();
        DividedName {
            family,
            given,
            ..divided
        }
    }
}
