//! Token-overlap text similarity
//!
//! A lightweight Jaccard-complement distance over whitespace token sets,
//! used to rank catalog items against a free-text query by name. This is
//! deliberately not a full-text search engine.

use ahash::AHashSet;
use facetx_core::Product;
use std::cmp::Ordering;

/// Token-set distance between two strings, in `[0, 1]`.
///
/// Both strings are lowercased and whitespace-tokenized into sets
/// (duplicate tokens collapse), then `distance = 1 - |intersection| /
/// |union|`. Two empty token sets are at distance 0. The measure is
/// symmetric, reflexive and independent of token order.
#[must_use]
pub fn token_set_distance(a: &str, b: &str) -> f64 {
    let tokens_a: AHashSet<String> = a.split_whitespace().map(str::to_lowercase).collect();
    let tokens_b: AHashSet<String> = b.split_whitespace().map(str::to_lowercase).collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    1.0 - intersection as f64 / union as f64
}

/// Rank products against a free-text query by name distance, ascending.
///
/// The sort is stable: equally distant products keep catalog order.
#[must_use]
pub fn rank_by_query<'a>(query: &str, products: &'a [Product]) -> Vec<(&'a Product, f64)> {
    let mut ranked: Vec<(&Product, f64)> = products
        .iter()
        .map(|product| (product, token_set_distance(query, &product.name)))
        .collect();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    ranked
}
