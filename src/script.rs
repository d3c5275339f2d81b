use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the classifier can tell apart by script alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Nepali,
    Sinhala,
    Unknown,
}

impl Language {
    /// Human readable label shown next to the input box
    pub fn label(&self) -> &'static str {
        match self {
            Language::Nepali => "Nepali 🇳🇵",
            Language::Sinhala => "Sinhala 🇱🇰",
            Language::Unknown => "Unknown",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Nepali => "nepali",
            Language::Sinhala => "sinhala",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_devanagari(c: char) -> bool {
    matches!(c as u32, 0x0900..=0x097F)
}

fn is_sinhala(c: char) -> bool {
    matches!(c as u32, 0x0D80..=0x0DFF)
}

/// Guess the language of `text` from the Unicode blocks it uses.
///
/// Devanagari takes priority: a string containing both scripts is Nepali.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_devanagari) {
        Language::Nepali
    } else if text.chars().any(is_sinhala) {
        Language::Sinhala
    } else {
        Language::Unknown
    }
}
