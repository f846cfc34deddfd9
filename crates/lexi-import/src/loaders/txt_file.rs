use lexi_core::WordPair;

use super::pair_from_cells;
use crate::decode::decode_text;
use crate::types::{ImportError, PairLoader};

/// One `english=french` pair per line, split at the first `=`
pub struct TxtLoader;

impl PairLoader for TxtLoader {
    fn load(&self, bytes: &[u8]) -> Result<Vec<WordPair>, ImportError> {
        let text = decode_text(bytes);

        let mut pairs = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((english, french)) = line.split_once('=') else {
                tracing::warn!(line = index + 1, content = line, "skipping line without '='");
                continue;
            };

            match pair_from_cells(english, french) {
                Some(pair) => pairs.push(pair),
                None => tracing::warn!(
                    line = index + 1,
                    content = line,
                    "skipping line with an empty side"
                ),
            }
        }

        Ok(pairs)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".txt"]
    }
}
