use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Top-level navigation category of the portfolio.
///
/// The set is closed and its order is the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Education,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Position in navigation order, starting at 0
    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Education => 1,
            Section::Skills => 2,
            Section::Projects => 3,
            Section::Experience => 4,
            Section::Contact => 5,
        }
    }

    /// Digit key bound to this section (1-based)
    pub fn shortcut(self) -> char {
        // index() < 6, so the digit is always in '1'..='6'
        (b'1' + self.index() as u8) as char
    }

    pub fn from_shortcut(key: char) -> Option<Section> {
        let digit = key.to_digit(10)? as usize;
        digit
            .checked_sub(1)
            .and_then(|idx| Section::ALL.get(idx).copied())
    }

    /// Next section, wrapping from Contact back to About
    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section, wrapping from About back to Contact
    pub fn previous(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_shortcut(section.shortcut()), Some(section));
        }
        assert_eq!(Section::from_shortcut('0'), None);
        assert_eq!(Section::from_shortcut('7'), None);
        assert_eq!(Section::from_shortcut('x'), None);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Section::Contact.next(), Section::About);
        assert_eq!(Section::About.previous(), Section::Contact);
        assert_eq!(Section::Skills.next(), Section::Projects);
        assert_eq!(Section::Skills.previous(), Section::Education);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (idx, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), idx);
        }
    }

    #[test]
    fn test_default_is_about() {
        assert_eq!(Section::default(), Section::About);
    }
}
