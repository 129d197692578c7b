//! Common types used across the service

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported display languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ta];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a locale code is not one of the supported languages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ta" => Ok(Language::Ta),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Severity bucket reported with a crop analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
        }
    }
}

/// When the farmer should re-check soil moisture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NextCheck {
    #[serde(rename = "12h")]
    In12Hours,
    #[serde(rename = "24h")]
    In24Hours,
    #[serde(rename = "48h")]
    In48Hours,
}

impl NextCheck {
    /// Short bucket label, as serialized
    pub fn label(&self) -> &'static str {
        match self {
            NextCheck::In12Hours => "12h",
            NextCheck::In24Hours => "24h",
            NextCheck::In48Hours => "48h",
        }
    }

    /// Human-readable interval in the requested language
    pub fn display(&self, language: Language) -> &'static str {
        match (self, language) {
            (NextCheck::In12Hours, Language::En) => "In 12 hours",
            (NextCheck::In24Hours, Language::En) => "In 24 hours",
            (NextCheck::In48Hours, Language::En) => "In 48 hours",
            (NextCheck::In12Hours, Language::Ta) => "12 மணி நேரத்தில்",
            (NextCheck::In24Hours, Language::Ta) => "24 மணி நேரத்தில்",
            (NextCheck::In48Hours, Language::Ta) => "48 மணி நேரத்தில்",
        }
    }
}

impl std::fmt::Display for NextCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!(" TA ".parse::<Language>(), Ok(Language::Ta));
        assert_eq!(
            "th".parse::<Language>(),
            Err(UnsupportedLanguage("th".to_string()))
        );
    }

    #[test]
    fn test_language_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Ta).unwrap(), "\"ta\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_next_check_serializes_as_bucket() {
        assert_eq!(
            serde_json::to_string(&NextCheck::In48Hours).unwrap(),
            "\"48h\""
        );
        assert_eq!(NextCheck::In12Hours.display(Language::En), "In 12 hours");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
    }
}
