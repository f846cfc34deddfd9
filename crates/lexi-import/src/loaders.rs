mod csv_file;
mod spreadsheet;
mod txt_file;

pub use csv_file::CsvLoader;
pub use spreadsheet::SpreadsheetLoader;
pub use txt_file::TxtLoader;

use lexi_core::WordPair;
use lexi_core::preprocess::normalize;

/// Normalizes both cells, `None` if either is blank
fn pair_from_cells(english: &str, french: &str) -> Option<WordPair> {
    let english = normalize(english);
    let french = normalize(french);

    (!english.is_empty() && !french.is_empty()).then(|| WordPair { english, french })
}
