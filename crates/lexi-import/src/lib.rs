//! Word-pair extraction from uploaded files.
//!
//! Every loader yields normalized `english`/`french` pairs in file order and
//! skips rows that do not carry both words.

use std::path::Path;

use lexi_core::WordPair;

pub mod decode;
pub mod loaders;
pub mod types;

pub use types::{FileFormat, ImportError, PairLoader};

/// Picks a loader from the extension of `file_name` and runs it over `bytes`
pub fn load_pairs(file_name: &str, bytes: &[u8]) -> Result<Vec<WordPair>, ImportError> {
    let format = FileFormat::from_file_name(file_name)?;
    let pairs = format.loader().load(bytes)?;

    tracing::info!(file_name, ?format, pairs = pairs.len(), "extracted word pairs");
    Ok(pairs)
}

pub fn load_file(path: &Path) -> Result<Vec<WordPair>, ImportError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ImportError::UnsupportedFormat(path.display().to_string()))?;

    let bytes = std::fs::read(path)?;
    load_pairs(file_name, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_extension() {
        let pairs = load_pairs("Words.TXT", b"cat=chat\n").unwrap();
        assert_eq!(pairs, vec![WordPair::new("cat", "chat")]);

        let pairs = load_pairs("words.csv", b"dog,chien\n").unwrap();
        assert_eq!(pairs, vec![WordPair::new("dog", "chien")]);
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(matches!(
            load_pairs("words.pdf", b""),
            Err(ImportError::UnsupportedFormat(ext)) if ext == ".pdf"
        ));
        assert!(matches!(
            load_pairs("words", b""),
            Err(ImportError::UnsupportedFormat(_))
        ));
    }
}
