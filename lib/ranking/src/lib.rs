//! # facetx Ranking
//!
//! Preference-weighted scoring on top of [`facetx_core`].
//!
//! - **Facet Scorer**: orders facet values by catalog frequency plus
//!   weighted bought/liked history, so the most relevant filters surface
//!   first
//! - **Item Ranker**: scores catalog items against history histograms with
//!   per-category weights, no-evidence penalties and near-hard selection
//!   constraints
//! - **Token distance**: lightweight Jaccard-complement text similarity for
//!   free-text queries over item names
//!
//! ## Example
//!
//! ```rust
//! use facetx_core::{Collator, FilterableProperties, Product};
//! use facetx_ranking::{FacetScorer, ItemRanker, RankerConfig, SelectionState};
//!
//! let products = vec![
//!     Product::new(1u64, "Red Chair").with_properties(
//!         FilterableProperties::new().with_category("furniture").with_colors(["red"]),
//!     ),
//!     Product::new(2u64, "Blue Lamp").with_properties(
//!         FilterableProperties::new().with_category("lighting").with_colors(["blue"]),
//!     ),
//! ];
//!
//! let collator = Collator::default();
//! let catalog_hist = collator.collate(&products);
//! let bought_hist = collator.collate(std::iter::once(&products[0]));
//! let liked_hist = facetx_core::FacetHistogram::new();
//!
//! // bought history pushes "red" and "furniture" to the top
//! let facets = FacetScorer::default().score(&catalog_hist, &bought_hist, &liked_hist);
//! assert_eq!(facets[0].score, 21.0);
//!
//! let ranker = ItemRanker::new(RankerConfig::default(), collator);
//! let ranked = ranker.rank(&products, &bought_hist, &liked_hist, &SelectionState::new());
//! assert_eq!(ranked[0].id_string(), "1");
//! ```
//!
//! All scoring is pure and synchronous: histograms, weights and selections
//! come in by reference, fresh result vectors come out, nothing is shared
//! or mutated.

pub mod facet_scorer;
pub mod ranker;
pub mod text;
pub mod weights;

pub use facet_scorer::{AdjustedCounts, FacetScorer, HistoryWeights, ScoredFacet};
pub use ranker::{
    ItemRanker, RankerConfig, ScoredProduct, SelectionState, SELECTED_FILTERS_KEY,
};
pub use text::{rank_by_query, token_set_distance};
pub use weights::{CategoryWeights, WeightError, WeightTable};
