use std::collections::BTreeSet;

use crate::error::{DictionaryError, Result};
use crate::language::Language;
use crate::preprocess::normalize_required;
use crate::tree::{TranslationTree, normalize_pairs};
use crate::types::{DictionaryStats, Neighbors, WordPair};

/// English and French trees kept as inverse views of one relation.
///
/// The trees are only mutated through the paired operations below, each of
/// which touches both sides before returning. Callers sharing a pair between
/// threads must hold a single lock across each call.
#[derive(Debug, Default)]
pub struct DictionaryPair {
    english: TranslationTree,
    french: TranslationTree,
}

impl DictionaryPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds both trees from `pairs`, see [`Self::bulk_add`]
    pub fn from_pairs(pairs: &[WordPair]) -> Result<Self> {
        let mut dictionary = Self::new();
        dictionary.bulk_add(pairs)?;
        Ok(dictionary)
    }

    /// Read-only view of the tree keyed by `language`
    pub fn tree(&self, language: Language) -> &TranslationTree {
        match language {
            Language::English => &self.english,
            Language::French => &self.french,
        }
    }

    fn trees_mut(&mut self, source: Language) -> (&mut TranslationTree, &mut TranslationTree) {
        match source {
            Language::English => (&mut self.english, &mut self.french),
            Language::French => (&mut self.french, &mut self.english),
        }
    }

    /// Translations of `word` read as a `from` word
    pub fn translate(&self, word: &str, from: Language) -> Option<&BTreeSet<String>> {
        self.tree(from).search(word)
    }

    /// Records `word` (in `from`) and `translation` as translations of each other.
    ///
    /// Returns `true` if the pair was new.
    pub fn add(&mut self, word: &str, translation: &str, from: Language) -> Result<bool> {
        let word = normalize_required(word).ok_or(DictionaryError::InvalidInput("word"))?;
        let translation =
            normalize_required(translation).ok_or(DictionaryError::InvalidInput("translation"))?;

        tracing::debug!(%word, %translation, %from, "adding pair");

        let (source, inverse) = self.trees_mut(from);
        let added = source.insert_normalized(word.clone(), translation.clone());
        inverse.insert_normalized(translation, word);

        Ok(added)
    }

    /// Removes `word` from the `from` tree and strips it from every inverse
    /// entry it was linked to.
    ///
    /// Returns the translations the word had.
    pub fn remove(&mut self, word: &str, from: Language) -> Result<BTreeSet<String>> {
        let word = normalize_required(word).ok_or(DictionaryError::InvalidInput("word"))?;

        let (source, inverse) = self.trees_mut(from);

        // Read the links before either tree changes
        let translations = source
            .search(&word)
            .cloned()
            .ok_or_else(|| DictionaryError::NotFound {
                word: word.clone(),
                language: from,
            })?;

        for translation in &translations {
            inverse.delete_value_normalized(translation, &word);
        }
        source.delete(&word)?;

        tracing::debug!(%word, %from, removed = translations.len(), "removed word");
        Ok(translations)
    }

    /// Removes one `word`/`translation` link from both sides, leaving any
    /// other translations of either word in place.
    ///
    /// Returns `false` if the pair was not recorded.
    pub fn remove_pair(&mut self, word: &str, translation: &str, from: Language) -> Result<bool> {
        let word = normalize_required(word).ok_or(DictionaryError::InvalidInput("word"))?;
        let translation =
            normalize_required(translation).ok_or(DictionaryError::InvalidInput("translation"))?;

        let (source, inverse) = self.trees_mut(from);
        let removed = source.delete_value_normalized(&word, &translation);
        inverse.delete_value_normalized(&translation, &word);

        Ok(removed)
    }

    /// Adds every pair in input order, english words keyed in the english
    /// tree and french words in the french tree.
    ///
    /// The whole batch is validated first; an invalid pair rejects it
    /// without touching either tree.
    pub fn bulk_add(&mut self, pairs: &[WordPair]) -> Result<usize> {
        let pairs = normalize_pairs(pairs)?;

        for WordPair { english, french } in &pairs {
            self.english.insert_normalized(english.clone(), french.clone());
            self.french.insert_normalized(french.clone(), english.clone());
        }

        tracing::debug!(count = pairs.len(), "bulk add");
        Ok(pairs.len())
    }

    /// Neighbouring keys of `word` in the `language` tree
    pub fn neighbors(&self, word: &str, language: Language) -> Option<Neighbors> {
        let tree = self.tree(language);
        if !tree.contains_key(word) {
            return None;
        }

        Some(Neighbors {
            predecessor: tree.predecessor(word).map(str::to_string),
            successor: tree.successor(word).map(str::to_string),
        })
    }

    pub fn stats(&self) -> DictionaryStats {
        let english_words = self.english.len();
        let french_words = self.french.len();
        let total_words = english_words + french_words;
        let total_translations = self.english.translation_count() + self.french.translation_count();

        let average_translations_per_word = if total_words == 0 {
            1.0
        } else {
            total_translations as f64 / total_words as f64
        };

        DictionaryStats {
            total_words,
            english_words,
            french_words,
            total_translations,
            average_translations_per_word,
            english_height: self.english.height(),
            french_height: self.french.height(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.english.is_empty() && self.french.is_empty()
    }
}
