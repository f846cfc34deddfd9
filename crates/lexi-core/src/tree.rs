use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::mem;

mod inorder;
mod node;

pub use inorder::IterInorder;
pub use node::Node;

use node::Link;

use crate::error::{DictionaryError, Result};
use crate::language::Language;
use crate::preprocess::{normalize, normalize_required};
use crate::types::WordPair;

/// Ordered multi-map from a word to the set of its translations.
///
/// A plain binary search tree: nodes are never rotated, so inserting keys in
/// ascending order yields a chain whose height equals the number of keys.
/// Every operation walks the tree iteratively, keeping those chains safe to
/// work with.
///
/// Keys and translations are normalized (see [`normalize`]) on the way in,
/// so lookups are case-insensitive.
#[derive(Debug, Default)]
pub struct TranslationTree {
    root: Link,
    len: usize,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys (nodes)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Sum of the translation set sizes over all keys
    pub fn translation_count(&self) -> usize {
        self.iter_inorder().map(|(_, values)| values.len()).sum()
    }

    /// Low-level access for custom traversals. The shape of the tree depends
    /// on insertion order; use [`Self::iter_inorder`] for a sorted view.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Adds `value` to the translations of `key`, creating the node if needed.
    ///
    /// Returns `true` if the translation was not already recorded for `key`.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidInput`] if either argument is blank.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<bool> {
        let key = normalize_required(key).ok_or(DictionaryError::InvalidInput("key"))?;
        let value = normalize_required(value).ok_or(DictionaryError::InvalidInput("value"))?;

        Ok(self.insert_normalized(key, value))
    }

    /// Caller guarantees both strings are already normalized and non-empty
    pub(crate) fn insert_normalized(&mut self, key: String, value: String) -> bool {
        let link = find_link_mut(&mut self.root, &key);
        if let Some(node) = link.as_mut() {
            return node.values.insert(value);
        }

        tracing::trace!(%key, "inserting node");
        *link = Some(Box::new(Node::new(key, value)));
        self.len += 1;
        true
    }

    /// Translations recorded for `key`, or `None` if the key is absent
    pub fn search(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.find(&normalize(key)).map(Node::values)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(&normalize(key)).is_some()
    }

    fn find(&self, key: &str) -> Option<&Node> {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Removes `key` and all of its translations.
    ///
    /// A node with two children takes over the key and translations of its
    /// in-order successor (the leftmost node of its right subtree), and the
    /// successor's old position is spliced out.
    ///
    /// Returns the removed translations, or `None` if the key was absent.
    pub fn delete(&mut self, key: &str) -> Result<Option<BTreeSet<String>>> {
        let key = normalize_required(key).ok_or(DictionaryError::InvalidInput("key"))?;

        let removed = remove_link(find_link_mut(&mut self.root, &key));
        if removed.is_some() {
            tracing::trace!(%key, "removed node");
            self.len -= 1;
        }

        Ok(removed)
    }

    /// Removes a single translation of `key`. The node itself is removed once
    /// its last translation is gone.
    ///
    /// Returns `false` (and changes nothing) if `key` is absent or does not
    /// have `value` among its translations.
    pub fn delete_value(&mut self, key: &str, value: &str) -> Result<bool> {
        let key = normalize_required(key).ok_or(DictionaryError::InvalidInput("key"))?;
        let value = normalize_required(value).ok_or(DictionaryError::InvalidInput("value"))?;

        Ok(self.delete_value_normalized(&key, &value))
    }

    pub(crate) fn delete_value_normalized(&mut self, key: &str, value: &str) -> bool {
        let link = find_link_mut(&mut self.root, key);
        let Some(node) = link.as_mut() else {
            return false;
        };

        if !node.values.remove(value) {
            return false;
        }

        if node.values.is_empty() {
            remove_link(link);
            self.len -= 1;
        }

        true
    }

    /// The key immediately before `key` in sorted order.
    ///
    /// `None` if `key` is the smallest key or is not in the tree.
    pub fn predecessor(&self, key: &str) -> Option<&str> {
        let key = normalize(key);
        let node = self.find(&key)?;

        if let Some(left) = node.left() {
            return Some(left.max().key());
        }

        // Last ancestor where the search path turned right
        let mut candidate = None;
        let mut current = self.root();
        while let Some(ancestor) = current {
            match key.as_str().cmp(ancestor.key()) {
                Ordering::Less => current = ancestor.left(),
                Ordering::Greater => {
                    candidate = Some(ancestor.key());
                    current = ancestor.right();
                }
                Ordering::Equal => break,
            }
        }

        candidate
    }

    /// The key immediately after `key` in sorted order.
    ///
    /// `None` if `key` is the largest key or is not in the tree.
    pub fn successor(&self, key: &str) -> Option<&str> {
        let key = normalize(key);
        let node = self.find(&key)?;

        if let Some(right) = node.right() {
            return Some(right.min().key());
        }

        // Last ancestor where the search path turned left
        let mut candidate = None;
        let mut current = self.root();
        while let Some(ancestor) = current {
            match key.as_str().cmp(ancestor.key()) {
                Ordering::Less => {
                    candidate = Some(ancestor.key());
                    current = ancestor.left();
                }
                Ordering::Greater => current = ancestor.right(),
                Ordering::Equal => break,
            }
        }

        candidate
    }

    pub fn min_key(&self) -> Option<&str> {
        self.root().map(|root| root.min().key())
    }

    pub fn max_key(&self) -> Option<&str> {
        self.root().map(|root| root.max().key())
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    ///
    /// Computed on every call.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<'_> {
        IterInorder::new(self.root())
    }

    /// Every `(key, translations)` entry in ascending key order
    pub fn inorder_traversal(&self) -> Vec<(&str, &BTreeSet<String>)> {
        self.iter_inorder().collect()
    }

    /// Inserts every pair, keyed by the word in `key_language`.
    ///
    /// All pairs are validated before the first insertion: a blank word
    /// anywhere in `pairs` rejects the whole batch and leaves the tree
    /// untouched.
    pub fn batch_insert(&mut self, pairs: &[WordPair], key_language: Language) -> Result<usize> {
        let pairs = normalize_pairs(pairs)?;
        let count = pairs.len();

        for WordPair { english, french } in pairs {
            match key_language {
                Language::English => self.insert_normalized(english, french),
                Language::French => self.insert_normalized(french, english),
            };
        }

        Ok(count)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Drop for TranslationTree {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default recursive drop would follow
        // chain-shaped trees all the way down the call stack.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Normalizes every pair, failing on the first one with a blank side.
pub(crate) fn normalize_pairs(pairs: &[WordPair]) -> Result<Vec<WordPair>> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let english = normalize_required(&pair.english).ok_or(DictionaryError::InvalidPair {
                index,
                reason: "english word is empty",
            })?;
            let french = normalize_required(&pair.french).ok_or(DictionaryError::InvalidPair {
                index,
                reason: "french word is empty",
            })?;
            Ok(WordPair { english, french })
        })
        .collect()
}

/// The link holding `key`, or the empty link where `key` would be inserted.
fn find_link_mut<'a>(mut link: &'a mut Link, key: &str) -> &'a mut Link {
    loop {
        let ordering = match link.as_deref().map(|node| key.cmp(node.key())) {
            None | Some(Ordering::Equal) => return link,
            Some(ordering) => ordering,
        };

        link = match link {
            Some(node) => {
                if ordering == Ordering::Less {
                    &mut node.left
                } else {
                    &mut node.right
                }
            }
            None => return link,
        };
    }
}

/// Unlinks the leftmost node reachable from `link`, promoting its right child.
fn detach_min(mut link: &mut Link) -> Option<Box<Node>> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = match link {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Removes the node held by `link`, returning its translations.
fn remove_link(link: &mut Link) -> Option<BTreeSet<String>> {
    let mut node = link.take()?;

    match (node.left.take(), node.right.take()) {
        (None, child) | (child, None) => {
            *link = child;
            let Node { values, .. } = *node;
            Some(values)
        }
        (Some(left), mut right) => {
            // Successor: one step right, then left as far as possible
            let Some(successor) = detach_min(&mut right) else {
                *link = Some(left);
                let Node { values, .. } = *node;
                return Some(values);
            };
            let Node { key, values, .. } = *successor;

            node.key = key;
            node.left = Some(left);
            node.right = right;
            let removed = mem::replace(&mut node.values, values);
            *link = Some(node);
            Some(removed)
        }
    }
}
