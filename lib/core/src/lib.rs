//! # facetx Core
//!
//! Core library for the facetx faceted filtering and ranking engine.
//!
//! This crate provides the fundamental data structures and aggregation
//! passes:
//!
//! - [`Product`] / [`Catalog`] - the immutable catalog model
//! - [`Bucketizer`] - range buckets for prices and ratings
//! - [`FacetHistogram`] - per-category facet value counts
//! - [`Collator`] - item attributes → normalized facet entries → histograms
//!
//! ## Example
//!
//! ```rust
//! use facetx_core::{Catalog, Collator, FilterableProperties, Product};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1u64, "Oak Dining Table").with_properties(
//!         FilterableProperties::new()
//!             .with_category("furniture")
//!             .with_colors(["brown"])
//!             .with_price(549.0),
//!     ),
//! ]);
//!
//! let collator = Collator::default();
//! let histogram = collator.collate(catalog.products());
//! assert_eq!(histogram.count("price", "$400 - $599"), 1);
//! ```
//!
//! Everything here is a pure, synchronous computation over in-memory data:
//! no I/O beyond the optional catalog loaders, no shared mutable state, and
//! histograms are never mutated once built.

pub mod bucket;
pub mod catalog;
pub mod collate;
pub mod error;
pub mod histogram;

pub use bucket::{Bucketizer, DEFAULT_PRICE_WIDTH, UNKNOWN_BUCKET};
pub use catalog::{Catalog, FilterableProperties, Product, ProductId};
pub use collate::{Collator, FacetEntry, DEFAULT_RATING_KEY};
pub use error::{Error, Result};
pub use histogram::FacetHistogram;
