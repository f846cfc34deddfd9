use std::fmt;

use lexi_core::WordPair;

use crate::loaders::{CsvLoader, SpreadsheetLoader, TxtLoader};

/// Turns raw file contents into word pairs
pub trait PairLoader: Send + Sync {
    fn load(&self, bytes: &[u8]) -> Result<Vec<WordPair>, ImportError>;

    /// Extensions (with the leading dot) this loader accepts
    fn extensions(&self) -> &'static [&'static str];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Txt,
    Spreadsheet,
}

impl FileFormat {
    pub const ALL: [FileFormat; 3] = [FileFormat::Csv, FileFormat::Txt, FileFormat::Spreadsheet];

    pub fn from_file_name(file_name: &str) -> Result<Self, ImportError> {
        let extension = file_name
            .rfind('.')
            .map(|dot| file_name[dot..].to_lowercase())
            .ok_or_else(|| ImportError::UnsupportedFormat(file_name.to_string()))?;

        Self::ALL
            .into_iter()
            .find(|format| format.loader().extensions().contains(&extension.as_str()))
            .ok_or(ImportError::UnsupportedFormat(extension))
    }

    pub fn loader(self) -> Box<dyn PairLoader> {
        match self {
            FileFormat::Csv => Box::new(CsvLoader),
            FileFormat::Txt => Box::new(TxtLoader),
            FileFormat::Spreadsheet => Box::new(SpreadsheetLoader),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Csv => f.write_str("csv"),
            FileFormat::Txt => f.write_str("txt"),
            FileFormat::Spreadsheet => f.write_str("spreadsheet"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook has no worksheet")]
    EmptyWorkbook,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(FileFormat::from_file_name("a.CSV").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_file_name("my.words.txt").unwrap(), FileFormat::Txt);
        assert_eq!(FileFormat::from_file_name("book.xlsx").unwrap(), FileFormat::Spreadsheet);
        assert_eq!(FileFormat::from_file_name("old.xls").unwrap(), FileFormat::Spreadsheet);
    }
}
