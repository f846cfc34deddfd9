use lexi_core::WordPair;

use super::pair_from_cells;
use crate::decode::decode_text;
use crate::types::{ImportError, PairLoader};

/// `english,french` rows; extra columns are ignored and there is no header row
pub struct CsvLoader;

impl PairLoader for CsvLoader {
    fn load(&self, bytes: &[u8]) -> Result<Vec<WordPair>, ImportError> {
        let text = decode_text(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut pairs = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() < 2 {
                tracing::debug!(row = row + 1, "skipping row: not enough columns");
                continue;
            }

            match pair_from_cells(&record[0], &record[1]) {
                Some(pair) => pairs.push(pair),
                None => tracing::debug!(row = row + 1, "skipping row: empty value(s)"),
            }
        }

        Ok(pairs)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".csv"]
    }
}
