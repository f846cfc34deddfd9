use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};
use lexi_core::preprocess::normalize;
use lexi_core::{DictionaryError, DictionaryPair, DictionaryStats, Language, Neighbors, WordPair};

use crate::audit::{AdditionRecord, RecentAdditions};
use crate::seed;

/// What an import hands back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub word_count: usize,
    pub sample: Vec<WordPair>,
}

/// The dictionary together with its recent-additions log.
///
/// Both live behind one lock in [`crate::AppState`] so a write request
/// updates the trees and the log atomically.
#[derive(Debug)]
pub struct DictionaryStore {
    pairs: DictionaryPair,
    recent: RecentAdditions,
    last_updated: DateTime<Utc>,
}

impl DictionaryStore {
    pub fn new(recent_capacity: usize) -> Self {
        Self {
            pairs: DictionaryPair::new(),
            recent: RecentAdditions::new(recent_capacity),
            last_updated: Utc::now(),
        }
    }

    pub fn pairs(&self) -> &DictionaryPair {
        &self.pairs
    }

    /// Translations of `word`, sorted; empty when the word is unknown
    pub fn translate(&self, word: &str, from: Language) -> Vec<String> {
        self.pairs
            .translate(word, from)
            .map(|translations| translations.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn add_word(
        &mut self,
        word: &str,
        translation: &str,
        from: Language,
    ) -> Result<bool, DictionaryError> {
        let added = self.pairs.add(word, translation, from)?;

        self.recent
            .push(AdditionRecord::now(normalize(word), normalize(translation)));
        self.touch();

        tracing::info!(word, translation, %from, added, "word added");
        Ok(added)
    }

    pub fn delete_word(
        &mut self,
        word: &str,
        from: Language,
    ) -> Result<BTreeSet<String>, DictionaryError> {
        let removed = self.pairs.remove(word, from)?;
        self.touch();

        tracing::info!(word, %from, translations = removed.len(), "word deleted");
        Ok(removed)
    }

    /// Removes a single link; `NotFound` when the pair was never recorded
    pub fn delete_pair(
        &mut self,
        word: &str,
        translation: &str,
        from: Language,
    ) -> Result<(), DictionaryError> {
        if !self.pairs.remove_pair(word, translation, from)? {
            return Err(DictionaryError::NotFound {
                word: normalize(word),
                language: from,
            });
        }
        self.touch();

        tracing::info!(word, translation, %from, "pair deleted");
        Ok(())
    }

    /// Adds every pair, then logs them as recent additions while the log has
    /// room. The first `sample_size` pairs are echoed back.
    pub fn import(
        &mut self,
        pairs: &[WordPair],
        sample_size: usize,
    ) -> Result<ImportSummary, DictionaryError> {
        let word_count = self.pairs.bulk_add(pairs)?;

        for pair in pairs {
            let record = AdditionRecord::now(normalize(&pair.english), normalize(&pair.french));
            if !self.recent.push_if_room(record) {
                break;
            }
        }
        self.touch();

        Ok(ImportSummary {
            word_count,
            sample: pairs.iter().take(sample_size).cloned().collect(),
        })
    }

    /// Loads the built-in phrase list. Their log entries are spread over the
    /// past few days so the recent view has something to show.
    pub fn seed_sample_data(&mut self) -> Result<usize, DictionaryError> {
        let pairs = seed::sample_pairs();
        let count = self.pairs.bulk_add(&pairs)?;

        let now = Utc::now();
        for (index, pair) in pairs.into_iter().enumerate() {
            let days_ago = (index % 5) as i64;
            self.recent.push(AdditionRecord {
                word: pair.english,
                translation: pair.french,
                date: now - TimeDelta::days(days_ago),
            });
        }
        self.touch();

        tracing::info!(count, "seeded sample data");
        Ok(count)
    }

    pub fn recent(&self) -> impl Iterator<Item = &AdditionRecord> {
        self.recent.iter()
    }

    pub fn stats(&self) -> DictionaryStats {
        self.pairs.stats()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn neighbors(&self, word: &str, language: Language) -> Option<Neighbors> {
        self.pairs.neighbors(word, language)
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
