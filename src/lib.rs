//! # facetx
//!
//! A preference-weighted faceted filtering and ranking engine for product
//! catalogs.
//!
//! Given a catalog of items with categorical and numeric attributes, a
//! history of items the user bought or liked, and the facet values the user
//! has explicitly selected, facetx:
//!
//! - ranks the available facet values so the most relevant filters surface
//!   first, and
//! - ranks catalog items by relevance to the user's history while
//!   penalizing items that conflict with explicit selections.
//!
//! ## Quick Start
//!
//! ```rust
//! use facetx::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1u64, "Red Chair").with_properties(
//!         FilterableProperties::new()
//!             .with_category("furniture")
//!             .with_colors(["red"])
//!             .with_price(250.0),
//!     ),
//!     Product::new(2u64, "Blue Lamp").with_properties(
//!         FilterableProperties::new()
//!             .with_category("lighting")
//!             .with_colors(["blue"])
//!             .with_price(80.0),
//!     ),
//! ]);
//!
//! let collator = Collator::default();
//! let catalog_hist = collator.collate(catalog.products());
//! let bought_hist = collator.collate(catalog.by_ids(&[ProductId::Integer(1)]));
//! let liked_hist = FacetHistogram::new();
//!
//! // most relevant facet values first
//! let facets = FacetScorer::default().score(&catalog_hist, &bought_hist, &liked_hist);
//! assert_eq!(facets[0].category, "category");
//!
//! // most relevant items first
//! let ranker = ItemRanker::new(RankerConfig::default(), collator);
//! let ranked = ranker.rank(catalog.products(), &bought_hist, &liked_hist, &SelectionState::new());
//! assert_eq!(ranked[0].id_string(), "1");
//! ```
//!
//! ## Crate Structure
//!
//! facetx is composed of several crates:
//!
//! - `facetx-core` - catalog model, range buckets, facet histograms,
//!   collation
//! - `facetx-ranking` - facet relevance scoring, item ranking, token-overlap
//!   text distance
//! - `facetx-store` - context-namespaced bought/liked/selection store with
//!   JSON snapshots
//!
//! The engine itself owns no I/O: the catalog source, the preference store
//! and the presentation layer are external collaborators.

// Re-export core types
pub use facetx_core::{
    Bucketizer, Catalog, Collator, Error, FacetEntry, FacetHistogram, FilterableProperties,
    Product, ProductId, Result, DEFAULT_PRICE_WIDTH, DEFAULT_RATING_KEY, UNKNOWN_BUCKET,
};

// Re-export ranking
pub use facetx_ranking::{
    rank_by_query, token_set_distance, AdjustedCounts, CategoryWeights, FacetScorer,
    HistoryWeights, ItemRanker, RankerConfig, ScoredFacet, ScoredProduct, SelectionState,
    WeightError, WeightTable,
};

// Re-export store
pub use facetx_store::{PreferenceStore, StoreError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        rank_by_query, token_set_distance, Bucketizer, Catalog, CategoryWeights, Collator, Error,
        FacetHistogram, FacetScorer, FilterableProperties, HistoryWeights, ItemRanker,
        PreferenceStore, Product, ProductId, RankerConfig, Result, ScoredFacet, ScoredProduct,
        SelectionState, WeightTable,
    };
}
