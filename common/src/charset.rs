use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";
/// The narrower symbol set offered on the sign-up form.
pub const BASIC_SPECIAL: &str = "!@#$%^&*()";

/// A named subset of characters that can be combined into a generation charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    #[strum(to_string = "uppercase", serialize = "upper")]
    Uppercase,
    #[strum(to_string = "lowercase", serialize = "lower")]
    Lowercase,
    #[strum(to_string = "digits", serialize = "digit")]
    #[serde(alias = "digits")]
    Digit,
    #[strum(to_string = "special", serialize = "symbols")]
    Special,
}

impl CharClass {
    /// used when no class is enabled
    pub const FALLBACK: CharClass = CharClass::Lowercase;

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase",
            CharClass::Lowercase => "Lowercase",
            CharClass::Digit => "Digits",
            CharClass::Special => "Special characters",
        }
    }
}

/// Which symbols [`CharClass::Special`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialSet {
    Extended,
    Basic,
}

impl Default for SpecialSet {
    fn default() -> Self {
        SpecialSet::Extended
    }
}

impl SpecialSet {
    pub fn chars(self) -> &'static str {
        match self {
            SpecialSet::Extended => SPECIAL,
            SpecialSet::Basic => BASIC_SPECIAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn classes_are_disjoint() {
        for a in CharClass::iter() {
            for b in CharClass::iter().filter(|b| *b != a) {
                assert!(!a.chars().chars().any(|c| b.contains(c)), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("upper".parse::<CharClass>().unwrap(), CharClass::Uppercase);
        assert_eq!("lowercase".parse::<CharClass>().unwrap(), CharClass::Lowercase);
        assert_eq!("digits".parse::<CharClass>().unwrap(), CharClass::Digit);
        assert_eq!("symbols".parse::<CharClass>().unwrap(), CharClass::Special);
        assert!("emoji".parse::<CharClass>().is_err());
    }

    #[test]
    fn special_set_has_no_alphanumerics() {
        assert!(SPECIAL.chars().all(|c| c.is_ascii_punctuation()));
        assert_eq!(SPECIAL.len(), 26);
    }

    #[test]
    fn basic_special_is_a_subset() {
        assert_eq!(SpecialSet::Basic.chars().len(), 10);
        assert!(BASIC_SPECIAL.chars().all(|c| CharClass::Special.contains(c)));
        assert_eq!(SpecialSet::default().chars(), SPECIAL);
    }
}
