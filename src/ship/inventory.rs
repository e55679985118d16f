//! Player inventory: independent copies of items, keyed by name.
use std::collections::HashMap;

use super::types::{Item, ItemKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: HashMap<String, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `item`. A copy with the same name is overwritten, so
    /// acquiring the same thing twice leaves a single entry.
    pub fn add_copy(&mut self, item: &Item) {
        self.items.insert(item.name.clone(), item.clone());
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn contains_kind(&self, kind: ItemKind) -> bool {
        self.items.values().any(|item| item.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
