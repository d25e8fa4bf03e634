//! Preference-weighted item ranking
//!
//! Scores catalog items against bought/liked history histograms with
//! per-category weights, penalizes values with no history evidence, and
//! turns explicit filter selections into near-hard constraints via a large
//! flat penalty plus a score cutoff.

use ahash::{AHashMap, AHashSet};
use facetx_core::{Collator, FacetEntry, FacetHistogram, Product};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::weights::WeightTable;

/// Breakdown key under which selection penalties are accounted
pub const SELECTED_FILTERS_KEY: &str = "selected_filters";

/// Configuration for an [`ItemRanker`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Per-category scoring weights
    pub weights: WeightTable,
    /// Base penalty for a facet value with no history evidence
    pub penalty_value: f64,
    /// Flat penalty per selected filter the item does not carry
    pub filter_penalty: f64,
    /// Items scoring below this are dropped from the output
    pub cutoff: f64,
    /// When true, history lookups are scoped to a value's own category.
    /// The default (false) looks a value up across the whole histogram:
    /// a bought "red" counts for a red item no matter which category the
    /// red was observed under. Deliberate, if surprising; kept switchable
    /// pending product-level validation.
    pub scope_to_own_category: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            penalty_value: 1.0,
            filter_penalty: 1000.0,
            cutoff: -500.0,
            scope_to_own_category: false,
        }
    }
}

/// The facet values a user has explicitly pinned.
///
/// Membership is case-insensitive: values are normalized to lowercase on
/// insert. Supplied by the caller per ranking call; never persisted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    values: AHashSet<String>,
}

impl SelectionState {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: &str) {
        self.values.insert(value.to_lowercase());
    }

    pub fn remove(&mut self, value: &str) -> bool {
        self.values.remove(&value.to_lowercase())
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the normalized (lowercase) selected values
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// A ranked catalog item with its score and per-category breakdown
#[derive(Debug, Clone)]
pub struct ScoredProduct {
    pub product: Product,
    /// Overall score; only ordering and the cutoff are meaningful
    pub score: f64,
    /// Contribution per facet category (selection penalties under
    /// [`SELECTED_FILTERS_KEY`]); sums to `score`
    pub category_scores: AHashMap<String, f64>,
}

impl ScoredProduct {
    /// Get the product ID as a string
    #[must_use]
    pub fn id_string(&self) -> String {
        self.product.id.to_string()
    }
}

/// Ranks catalog items by relevance to bought/liked history.
#[derive(Debug, Clone, Default)]
pub struct ItemRanker {
    config: RankerConfig,
    collator: Collator,
}

impl ItemRanker {
    #[must_use]
    pub fn new(config: RankerConfig, collator: Collator) -> Self {
        Self { config, collator }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Score, threshold and order the given items.
    ///
    /// Items whose final score falls below the configured cutoff are
    /// dropped. The remainder is sorted by score descending; the sort is
    /// stable, so ties keep catalog order.
    #[must_use]
    pub fn rank(
        &self,
        products: &[Product],
        bought: &FacetHistogram,
        liked: &FacetHistogram,
        selection: &SelectionState,
    ) -> Vec<ScoredProduct> {
        let mut scored: Vec<ScoredProduct> = products
            .iter()
            .map(|product| self.score_product(product, bought, liked, selection))
            .filter(|sp| sp.score >= self.config.cutoff)
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }

    fn history_count(&self, histogram: &FacetHistogram, entry: &FacetEntry) -> u64 {
        if self.config.scope_to_own_category {
            histogram.count(&entry.category, &entry.value)
        } else {
            histogram.count_anywhere(&entry.value)
        }
    }

    fn found_in(&self, histogram: &FacetHistogram, entry: &FacetEntry) -> bool {
        if self.config.scope_to_own_category {
            histogram.count(&entry.category, &entry.value) > 0
        } else {
            histogram.contains_anywhere(&entry.value)
        }
    }

    fn score_product(
        &self,
        product: &Product,
        bought: &FacetHistogram,
        liked: &FacetHistogram,
        selection: &SelectionState,
    ) -> ScoredProduct {
        let entries = self.collator.ranking_entries(product);
        let mut score = 0.0;
        let mut category_scores: AHashMap<String, f64> = AHashMap::new();

        for entry in &entries {
            let weights = self.config.weights.get(&entry.category);
            let mut contribution = weights.bought_weight * self.history_count(bought, entry) as f64
                + weights.liked_weight * self.history_count(liked, entry) as f64;

            // no evidence in either history: flat penalty, bought checked first
            let found = self.found_in(bought, entry) || self.found_in(liked, entry);
            if !found {
                contribution -= self.config.penalty_value * weights.penalty_weight;
            }

            score += contribution;
            *category_scores.entry(entry.category.clone()).or_insert(0.0) += contribution;
        }

        if !selection.is_empty() {
            let own_values: AHashSet<String> =
                entries.iter().map(|e| e.value.to_lowercase()).collect();
            let mut penalty = 0.0;
            for selected in selection.iter() {
                if !own_values.contains(selected) {
                    penalty -= self.config.filter_penalty;
                }
            }
            if penalty != 0.0 {
                score += penalty;
                *category_scores
                    .entry(SELECTED_FILTERS_KEY.to_string())
                    .or_insert(0.0) += penalty;
            }
        }

        ScoredProduct {
            product: product.clone(),
            score,
            category_scores,
        }
    }
}
