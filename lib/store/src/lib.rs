//! # facetx Store
//!
//! Key-value preference store for the facetx engine: bought/liked product
//! histories and explicitly selected filter keys, namespaced per context
//! key, with optional JSON snapshot persistence.
//!
//! The engine only consumes the read accessors; the mutators back the
//! presentation layer's buy/like/filter toggles.
//!
//! ## Example
//!
//! ```rust
//! use facetx_core::ProductId;
//! use facetx_store::PreferenceStore;
//!
//! let store = PreferenceStore::new();
//! store.add_bought("shop", ProductId::Integer(42));
//! store.add_selected_filter("shop", "red");
//!
//! assert!(store.is_bought("shop", &ProductId::Integer(42)));
//! assert_eq!(store.selected_filters("shop"), vec!["red"]);
//! // other contexts are untouched
//! assert!(store.bought_ids("elsewhere").is_empty());
//! ```

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{Result, StoreError};
pub use store::PreferenceStore;
