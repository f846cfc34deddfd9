use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use lexi_core::WordPair;

use super::pair_from_cells;
use crate::types::{ImportError, PairLoader};

/// First worksheet of an Excel workbook. Row 1 is a header; columns A and B
/// hold the english and french words.
pub struct SpreadsheetLoader;

impl PairLoader for SpreadsheetLoader {
    fn load(&self, bytes: &[u8]) -> Result<Vec<WordPair>, ImportError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ImportError::EmptyWorkbook)??;

        tracing::debug!(rows = range.height(), columns = range.width(), "reading worksheet");
        Ok(pairs_from_range(&range))
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".xlsx", ".xls", ".xlsm", ".ods"]
    }
}

/// Rows after the header, columns A and B
fn pairs_from_range(range: &Range<Data>) -> Vec<WordPair> {
    let mut pairs = Vec::new();
    for (index, row) in range.rows().enumerate().skip(1) {
        let [english, french, ..] = row else {
            tracing::debug!(row = index + 1, "skipping row: not enough columns");
            continue;
        };

        match pair_from_cells(&cell_text(english), &cell_text(french)) {
            Some(pair) => pairs.push(pair),
            None => tracing::debug!(row = index + 1, "skipping row: empty value(s)"),
        }
    }
    pairs
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}
