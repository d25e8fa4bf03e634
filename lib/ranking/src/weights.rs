//! Per-category scoring weights
//!
//! Defines how strongly each facet category's bought/liked evidence counts
//! toward an item's score, and how hard an unmatched value is penalized.
//! Configured once per ranking session; the ranker only reads it.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Weights applied to one facet category's evidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    /// Multiplier for counts found in the bought histogram
    pub bought_weight: f64,
    /// Multiplier for counts found in the liked histogram
    pub liked_weight: f64,
    /// Multiplier for the flat no-evidence penalty
    pub penalty_weight: f64,
}

impl CategoryWeights {
    pub const ZERO: CategoryWeights = CategoryWeights {
        bought_weight: 0.0,
        liked_weight: 0.0,
        penalty_weight: 0.0,
    };

    #[inline]
    #[must_use]
    pub fn new(bought_weight: f64, liked_weight: f64, penalty_weight: f64) -> Self {
        Self {
            bought_weight,
            liked_weight,
            penalty_weight,
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Mapping from facet category to its [`CategoryWeights`].
///
/// Categories without an entry fall back to a configurable default
/// (all-zero unless overridden). An all-zero table is a legal degenerate
/// configuration: ranking then reduces to selection penalties over the
/// catalog's native order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    categories: AHashMap<String, CategoryWeights>,
    #[serde(default)]
    fallback: CategoryWeights,
}

impl Default for WeightTable {
    /// The reference tuning: category evidence dominates, brand likes count
    /// a little extra, everything else is uniform.
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("category", CategoryWeights::new(5.0, 2.0, 1.0));
        table.insert("subcategory", CategoryWeights::new(3.0, 1.0, 1.0));
        table.insert("product_type", CategoryWeights::new(2.0, 1.0, 1.0));
        table.insert("colors", CategoryWeights::new(2.0, 1.0, 1.0));
        table.insert("materials", CategoryWeights::new(2.0, 1.0, 1.0));
        table.insert("styles", CategoryWeights::new(2.0, 1.0, 1.0));
        table.insert("features", CategoryWeights::new(2.0, 1.0, 1.0));
        table.insert("brand", CategoryWeights::new(2.0, 1.5, 1.0));
        table.insert("user_rating", CategoryWeights::new(2.0, 1.0, 1.0));
        table.insert("price", CategoryWeights::new(2.0, 1.0, 1.0));
        table
    }
}

impl WeightTable {
    /// A table with no entries and an all-zero fallback
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: AHashMap::new(),
            fallback: CategoryWeights::ZERO,
        }
    }

    /// A table applying the same weights to every category
    #[must_use]
    pub fn uniform(weights: CategoryWeights) -> Self {
        Self {
            categories: AHashMap::new(),
            fallback: weights,
        }
    }

    pub fn insert(&mut self, category: impl Into<String>, weights: CategoryWeights) {
        self.categories.insert(category.into(), weights);
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, weights: CategoryWeights) -> Self {
        self.insert(category, weights);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, weights: CategoryWeights) -> Self {
        self.fallback = weights;
        self
    }

    /// Weights for `category`, or the fallback when it has no entry
    #[must_use]
    pub fn get(&self, category: &str) -> CategoryWeights {
        self.categories
            .get(category)
            .copied()
            .unwrap_or(self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> CategoryWeights {
        self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryWeights)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Advisory sanity check: a purchase is strictly stronger evidence than
    /// a like, so every non-zeroed category must have
    /// `bought_weight > liked_weight`. Nothing calls this implicitly;
    /// degenerate all-zero tables are valid without it.
    pub fn validate(&self) -> Result<(), WeightError> {
        for (name, weights) in &self.categories {
            check_dominance(name, weights)?;
        }
        check_dominance("(fallback)", &self.fallback)
    }
}

fn check_dominance(category: &str, weights: &CategoryWeights) -> Result<(), WeightError> {
    if weights.bought_weight == 0.0 && weights.liked_weight == 0.0 {
        return Ok(()); // scoring disabled for this category
    }
    if weights.bought_weight <= weights.liked_weight {
        return Err(WeightError::BoughtNotDominant {
            category: category.to_string(),
            bought: weights.bought_weight,
            liked: weights.liked_weight,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WeightError {
    #[error("Category '{category}' has bought weight {bought} <= liked weight {liked}")]
    BoughtNotDominant {
        category: String,
        bought: f64,
        liked: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_falls_back() {
        let table = WeightTable::empty()
            .with_category("colors", CategoryWeights::new(2.0, 1.0, 1.0));

        assert_eq!(table.get("colors").bought_weight, 2.0);
        assert_eq!(table.get("materials"), CategoryWeights::ZERO);

        let uniform = WeightTable::uniform(CategoryWeights::new(3.0, 1.0, 0.5));
        assert_eq!(uniform.get("anything").liked_weight, 1.0);
    }

    #[test]
    fn test_default_table_validates() {
        WeightTable::default().validate().unwrap();
    }

    #[test]
    fn test_zeroed_table_validates() {
        WeightTable::empty().validate().unwrap();
        WeightTable::uniform(CategoryWeights::ZERO).validate().unwrap();
    }

    #[test]
    fn test_inverted_weights_rejected() {
        let table = WeightTable::empty()
            .with_category("colors", CategoryWeights::new(1.0, 5.0, 1.0));
        assert!(matches!(
            table.validate(),
            Err(WeightError::BoughtNotDominant { .. })
        ));

        // equal non-zero weights are also not dominant
        let tied = WeightTable::uniform(CategoryWeights::new(2.0, 2.0, 1.0));
        assert!(tied.validate().is_err());
    }
}
