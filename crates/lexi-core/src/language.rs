use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;

/// Side of the dictionary a word belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
}

impl Language {
    /// The language on the opposite side of the dictionary
    pub fn other(self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("english"),
            Language::French => f.write_str("french"),
        }
    }
}

impl FromStr for Language {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "french" | "fr" => Ok(Language::French),
            other => Err(DictionaryError::UnknownLanguage(other.to_string())),
        }
    }
}
