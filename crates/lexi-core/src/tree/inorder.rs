use std::collections::BTreeSet;
use std::iter::FusedIterator;

use super::Node;

/// Ascending walk over `(key, translations)`, driven by an explicit stack so
/// degenerate (chain-shaped) trees do not exhaust the call stack.
pub struct IterInorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> IterInorder<'a> {
    pub(super) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a> Iterator for IterInorder<'a> {
    type Item = (&'a str, &'a BTreeSet<String>);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());

        Some((node.key(), node.values()))
    }
}

impl FusedIterator for IterInorder<'_> {}
