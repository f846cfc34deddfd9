pub mod error;
pub mod language;
pub mod pair;
pub mod preprocess;
pub mod tree;
pub mod types;

pub use error::{DictionaryError, Result};
pub use language::Language;
pub use pair::DictionaryPair;
pub use tree::TranslationTree;
pub use types::{DictionaryStats, Neighbors, WordPair};
