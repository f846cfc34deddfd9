use serde::{Deserialize, Serialize};

/// One english/french pair as it comes out of an import or a request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub english: String,
    pub french: String,
}

impl WordPair {
    pub fn new(english: impl Into<String>, french: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            french: french.into(),
        }
    }
}

impl<E: Into<String>, F: Into<String>> From<(E, F)> for WordPair {
    fn from((english, french): (E, F)) -> Self {
        Self::new(english, french)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryStats {
    pub total_words: usize,
    pub english_words: usize,
    pub french_words: usize,
    pub total_translations: usize,
    pub average_translations_per_word: f64,
    pub english_height: usize,
    pub french_height: usize,
}

/// Keys adjacent to a word in sorted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub predecessor: Option<String>,
    pub successor: Option<String>,
}
