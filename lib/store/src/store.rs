//! Context-namespaced preference lists
use ahash::AHashMap;
use facetx_core::ProductId;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The per-context lists: bought ids, liked ids, selected filter keys.
///
/// Insertion order is preserved and duplicates are rejected on add, so the
/// lists read back exactly as the user built them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub(crate) struct ContextData {
    #[serde(default)]
    pub bought: Vec<ProductId>,
    #[serde(default)]
    pub liked: Vec<ProductId>,
    #[serde(default)]
    pub selected_filters: Vec<String>,
}

/// Key-value store for interaction history and filter selections.
///
/// Every accessor takes a caller-supplied context key; contexts are fully
/// independent namespaces. Reads on a missing context yield empty lists,
/// never an error - the engine treats empty as "no signal". The store is
/// an external collaborator of the ranking core: the core itself only ever
/// consumes the read accessors.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    pub(crate) contexts: RwLock<AHashMap<String, ContextData>>,
    pub(crate) path: Option<PathBuf>,
}

impl PreferenceStore {
    /// A fresh in-memory store with no backing file
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_context<T>(&self, context: &str, f: impl FnOnce(&ContextData) -> T) -> Option<T> {
        self.contexts.read().get(context).map(f)
    }

    fn with_context<T>(&self, context: &str, f: impl FnOnce(&mut ContextData) -> T) -> T {
        let mut contexts = self.contexts.write();
        f(contexts.entry(context.to_string()).or_default())
    }

    // --- bought history ---

    #[must_use]
    pub fn bought_ids(&self, context: &str) -> Vec<ProductId> {
        self.read_context(context, |data| data.bought.clone())
            .unwrap_or_default()
    }

    /// Record a purchase; returns false if the id was already present
    pub fn add_bought(&self, context: &str, id: ProductId) -> bool {
        self.with_context(context, |data| {
            if data.bought.contains(&id) {
                false
            } else {
                data.bought.push(id);
                true
            }
        })
    }

    pub fn remove_bought(&self, context: &str, id: &ProductId) -> bool {
        self.with_context(context, |data| {
            let before = data.bought.len();
            data.bought.retain(|existing| existing != id);
            data.bought.len() != before
        })
    }

    #[must_use]
    pub fn is_bought(&self, context: &str, id: &ProductId) -> bool {
        self.read_context(context, |data| data.bought.contains(id))
            .unwrap_or(false)
    }

    pub fn clear_bought(&self, context: &str) {
        self.with_context(context, |data| data.bought.clear());
    }

    // --- liked history ---

    #[must_use]
    pub fn liked_ids(&self, context: &str) -> Vec<ProductId> {
        self.read_context(context, |data| data.liked.clone())
            .unwrap_or_default()
    }

    /// Record a like; returns false if the id was already present
    pub fn add_liked(&self, context: &str, id: ProductId) -> bool {
        self.with_context(context, |data| {
            if data.liked.contains(&id) {
                false
            } else {
                data.liked.push(id);
                true
            }
        })
    }

    pub fn remove_liked(&self, context: &str, id: &ProductId) -> bool {
        self.with_context(context, |data| {
            let before = data.liked.len();
            data.liked.retain(|existing| existing != id);
            data.liked.len() != before
        })
    }

    #[must_use]
    pub fn is_liked(&self, context: &str, id: &ProductId) -> bool {
        self.read_context(context, |data| data.liked.contains(id))
            .unwrap_or(false)
    }

    pub fn clear_liked(&self, context: &str) {
        self.with_context(context, |data| data.liked.clear());
    }

    // --- selected filters ---

    #[must_use]
    pub fn selected_filters(&self, context: &str) -> Vec<String> {
        self.read_context(context, |data| data.selected_filters.clone())
            .unwrap_or_default()
    }

    /// Pin a filter key; returns false if it was already selected
    pub fn add_selected_filter(&self, context: &str, filter: impl Into<String>) -> bool {
        let filter = filter.into();
        self.with_context(context, |data| {
            if data.selected_filters.contains(&filter) {
                false
            } else {
                data.selected_filters.push(filter);
                true
            }
        })
    }

    pub fn remove_selected_filter(&self, context: &str, filter: &str) -> bool {
        self.with_context(context, |data| {
            let before = data.selected_filters.len();
            data.selected_filters.retain(|existing| existing != filter);
            data.selected_filters.len() != before
        })
    }

    pub fn clear_selected_filters(&self, context: &str) {
        self.with_context(context, |data| data.selected_filters.clear());
    }

    /// All context keys with recorded data
    #[must_use]
    pub fn contexts(&self) -> Vec<String> {
        self.contexts.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bought_round_trip() {
        let store = PreferenceStore::new();

        assert!(store.add_bought("shop", ProductId::Integer(1)));
        assert!(store.add_bought("shop", ProductId::Integer(2)));
        assert!(!store.add_bought("shop", ProductId::Integer(1))); // duplicate

        assert_eq!(
            store.bought_ids("shop"),
            vec![ProductId::Integer(1), ProductId::Integer(2)]
        );
        assert!(store.is_bought("shop", &ProductId::Integer(1)));
        assert!(!store.is_bought("shop", &ProductId::Integer(3)));

        assert!(store.remove_bought("shop", &ProductId::Integer(1)));
        assert!(!store.remove_bought("shop", &ProductId::Integer(1)));
        assert_eq!(store.bought_ids("shop"), vec![ProductId::Integer(2)]);
    }

    #[test]
    fn test_contexts_are_independent() {
        let store = PreferenceStore::new();
        store.add_bought("shop-a", ProductId::Integer(1));
        store.add_liked("shop-b", ProductId::Integer(1));

        assert!(store.is_bought("shop-a", &ProductId::Integer(1)));
        assert!(!store.is_bought("shop-b", &ProductId::Integer(1)));
        assert!(store.is_liked("shop-b", &ProductId::Integer(1)));
        assert!(store.liked_ids("shop-a").is_empty());
    }

    #[test]
    fn test_missing_context_reads_empty() {
        let store = PreferenceStore::new();
        assert!(store.bought_ids("nowhere").is_empty());
        assert!(store.liked_ids("nowhere").is_empty());
        assert!(store.selected_filters("nowhere").is_empty());
        assert!(!store.is_bought("nowhere", &ProductId::Integer(1)));
    }

    #[test]
    fn test_selected_filters() {
        let store = PreferenceStore::new();
        assert!(store.add_selected_filter("shop", "red"));
        assert!(store.add_selected_filter("shop", "$0 - $199"));
        assert!(!store.add_selected_filter("shop", "red"));

        assert_eq!(store.selected_filters("shop"), vec!["red", "$0 - $199"]);

        assert!(store.remove_selected_filter("shop", "red"));
        assert_eq!(store.selected_filters("shop"), vec!["$0 - $199"]);

        store.clear_selected_filters("shop");
        assert!(store.selected_filters("shop").is_empty());
    }

    #[test]
    fn test_clear_only_touches_one_list() {
        let store = PreferenceStore::new();
        store.add_bought("shop", ProductId::Integer(1));
        store.add_liked("shop", ProductId::Integer(2));
        store.add_selected_filter("shop", "red");

        store.clear_bought("shop");
        assert!(store.bought_ids("shop").is_empty());
        assert_eq!(store.liked_ids("shop"), vec![ProductId::Integer(2)]);
        assert_eq!(store.selected_filters("shop"), vec!["red"]);
    }
}
