use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language: {0}")]
pub struct LanguageError(pub String);

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Khmer
    Km,
    /// Simplified Chinese
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Km, Language::Zh];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Km => "km",
            Language::Zh => "zh",
        }
    }

    /// Name of the language in that language, for the language toggle
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Km => "ខ្មែរ",
            Language::Zh => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "km" => Ok(Language::Km),
            "zh" => Ok(Language::Zh),
            _ => Err(LanguageError(s.to_string())),
        }
    }
}
