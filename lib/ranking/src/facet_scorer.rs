//! Facet relevance scoring
//!
//! Combines the catalog-wide histogram with bought/liked history histograms
//! into an ordered ranking of facet values, so the most relevant filters
//! surface first in the presentation layer.

use ahash::{AHashMap, AHashSet};
use facetx_core::FacetHistogram;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Weights applied to history counts when scoring facets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryWeights {
    pub bought_weight: f64,
    pub liked_weight: f64,
}

impl Default for HistoryWeights {
    /// Reference tuning: a purchase is worth twenty likes
    fn default() -> Self {
        Self {
            bought_weight: 20.0,
            liked_weight: 1.0,
        }
    }
}

impl HistoryWeights {
    #[inline]
    #[must_use]
    pub fn new(bought_weight: f64, liked_weight: f64) -> Self {
        Self {
            bought_weight,
            liked_weight,
        }
    }
}

/// One facet value with its relevance score.
///
/// Scores are not normalized; only the relative order is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFacet {
    pub category: String,
    pub value: String,
    pub score: f64,
}

/// Scores facet values against catalog, bought and liked histograms.
#[derive(Debug, Clone, Default)]
pub struct FacetScorer {
    weights: HistoryWeights,
}

impl FacetScorer {
    #[inline]
    #[must_use]
    pub fn new(weights: HistoryWeights) -> Self {
        Self { weights }
    }

    #[inline]
    #[must_use]
    pub fn weights(&self) -> HistoryWeights {
        self.weights
    }

    /// Score every facet value appearing in any of the three histograms.
    ///
    /// `score = catalog_count + bought_weight * bought_count
    ///        + liked_weight * liked_count`, with 0 for a missing source. A
    /// value present only in history and absent from the catalog is still
    /// scored. The result is sorted by score descending; ties are pinned to
    /// (category, value) lexicographic order so output is stable across
    /// runs.
    #[must_use]
    pub fn score(
        &self,
        catalog: &FacetHistogram,
        bought: &FacetHistogram,
        liked: &FacetHistogram,
    ) -> Vec<ScoredFacet> {
        let mut seen: AHashSet<(&str, &str)> = AHashSet::new();
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        for histogram in [catalog, bought, liked] {
            for (category, value, _) in histogram.iter() {
                if seen.insert((category, value)) {
                    pairs.push((category, value));
                }
            }
        }

        let mut scored: Vec<ScoredFacet> = pairs
            .into_iter()
            .map(|(category, value)| {
                let score = catalog.count(category, value) as f64
                    + self.weights.bought_weight * bought.count(category, value) as f64
                    + self.weights.liked_weight * liked.count(category, value) as f64;
                ScoredFacet {
                    category: category.to_string(),
                    value: value.to_string(),
                    score,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
                .then_with(|| a.value.cmp(&b.value))
        });
        scored
    }

    /// Catalog counts adjusted by weighted history counts.
    ///
    /// Deep-copies the catalog histogram into float counts and adds
    /// `bought_weight * bought_count + liked_weight * liked_count` to every
    /// (category, value) pair the catalog holds. The inputs are never
    /// mutated; the catalog histogram can be reused across many calls.
    #[must_use]
    pub fn adjusted_counts(
        &self,
        catalog: &FacetHistogram,
        bought: &FacetHistogram,
        liked: &FacetHistogram,
    ) -> AdjustedCounts {
        let mut categories: AHashMap<String, AHashMap<String, f64>> = AHashMap::new();
        for (category, value, count) in catalog.iter() {
            let adjusted = count as f64
                + self.weights.bought_weight * bought.count(category, value) as f64
                + self.weights.liked_weight * liked.count(category, value) as f64;
            categories
                .entry(category.to_string())
                .or_default()
                .insert(value.to_string(), adjusted);
        }
        AdjustedCounts { categories }
    }
}

/// Float-valued facet counts produced by [`FacetScorer::adjusted_counts`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustedCounts {
    categories: AHashMap<String, AHashMap<String, f64>>,
}

impl AdjustedCounts {
    #[must_use]
    pub fn count(&self, category: &str, value: &str) -> f64 {
        self.categories
            .get(category)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&AHashMap<String, f64>> {
        self.categories.get(name)
    }

    #[must_use]
    pub fn into_inner(self) -> AHashMap<String, AHashMap<String, f64>> {
        self.categories
    }
}
