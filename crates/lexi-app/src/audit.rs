use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionRecord {
    pub word: String,
    pub translation: String,
    pub date: DateTime<Utc>,
}

impl AdditionRecord {
    pub fn now(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            date: Utc::now(),
        }
    }
}

/// Bounded FIFO of the latest additions, oldest first
#[derive(Debug)]
pub struct RecentAdditions {
    records: VecDeque<AdditionRecord>,
    capacity: usize,
}

impl RecentAdditions {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `record`, evicting the oldest entry when full
    pub fn push(&mut self, record: AdditionRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Appends `record` only if there is room left; bulk imports use this so a
    /// large file does not flush out manual additions.
    pub fn push_if_room(&mut self, record: AdditionRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push_back(record);
        true
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdditionRecord> {
        self.records.iter()
    }
}
