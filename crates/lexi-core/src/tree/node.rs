use std::collections::BTreeSet;

pub(crate) type Link = Option<Box<Node>>;

/// A word and every translation recorded for it
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    pub(super) key: String,
    pub(super) values: BTreeSet<String>,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    pub(super) fn new(key: String, value: String) -> Self {
        Self {
            key,
            values: BTreeSet::from([value]),
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Never empty while the node is reachable from the root
    pub fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Leftmost node of this subtree
    pub(super) fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// Rightmost node of this subtree
    pub(super) fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }
}
