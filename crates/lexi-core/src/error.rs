use crate::language::Language;

pub type Result<T> = std::result::Result<T, DictionaryError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("Invalid input: {0} must not be empty")]
    InvalidInput(&'static str),

    #[error("Word not found: '{word}' ({language})")]
    NotFound { word: String, language: Language },

    #[error("Invalid pair at position {index}: {reason}")]
    InvalidPair { index: usize, reason: &'static str },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}
