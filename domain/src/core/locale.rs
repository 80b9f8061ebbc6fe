//! Locale value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Content locale for prompts and fallback data.
///
/// Parsing accepts BCP-47 style codes and ignores the region suffix, so
/// `"id-ID"` and `"en_US"` resolve to [`Locale::Id`] and [`Locale::En`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Id];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Parse a locale code, falling back to English when unsupported
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Locale::En),
            // "in" is the legacy ISO 639 code for Indonesian
            "id" | "in" => Ok(Locale::Id),
            _ => Err(DomainError::UnsupportedLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ID".parse::<Locale>().unwrap(), Locale::Id);
        assert_eq!("id-ID".parse::<Locale>().unwrap(), Locale::Id);
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_unsupported_locale() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err, DomainError::UnsupportedLocale("fr".to_string()));
    }

    #[test]
    fn test_from_code_or_default() {
        assert_eq!(Locale::from_code_or_default("id"), Locale::Id);
        assert_eq!(Locale::from_code_or_default("ja"), Locale::En);
        assert_eq!(Locale::from_code_or_default(""), Locale::En);
    }

    #[test]
    fn test_display_round_trips() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
