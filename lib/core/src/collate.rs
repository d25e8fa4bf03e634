//! Facet collation
//!
//! Turns a product's attributes into normalized facet entries and
//! aggregates whole item sequences into [`FacetHistogram`]s. The same
//! [`Collator`] instance serves collation and ranking so both use one
//! bucketizer and one rating key.

use crate::bucket::Bucketizer;
use crate::catalog::{FilterableProperties, Product};
use crate::histogram::FacetHistogram;

/// Default histogram category key for rating buckets
pub const DEFAULT_RATING_KEY: &str = "user_rating";

/// One normalized facet value of a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetEntry {
    pub category: String,
    pub value: String,
}

impl FacetEntry {
    fn new(category: &str, value: impl Into<String>) -> Self {
        Self {
            category: category.to_string(),
            value: value.into(),
        }
    }
}

/// Extracts facet entries from products and aggregates them into histograms.
#[derive(Debug, Clone)]
pub struct Collator {
    bucketizer: Bucketizer,
    rating_key: String,
}

impl Default for Collator {
    fn default() -> Self {
        Self::new(Bucketizer::default())
    }
}

impl Collator {
    #[must_use]
    pub fn new(bucketizer: Bucketizer) -> Self {
        Self {
            bucketizer,
            rating_key: DEFAULT_RATING_KEY.to_string(),
        }
    }

    /// Override the histogram category key used for rating buckets
    /// (catalog feeds variously call it `user_rating` or `rating`)
    #[must_use]
    pub fn with_rating_key(mut self, key: impl Into<String>) -> Self {
        self.rating_key = key.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn bucketizer(&self) -> &Bucketizer {
        &self.bucketizer
    }

    #[inline]
    #[must_use]
    pub fn rating_key(&self) -> &str {
        &self.rating_key
    }

    fn push_categorical(props: &FilterableProperties, entries: &mut Vec<FacetEntry>) {
        for (key, value) in [
            ("category", &props.category),
            ("subcategory", &props.subcategory),
            ("product_type", &props.product_type),
        ] {
            if let Some(v) = value {
                entries.push(FacetEntry::new(key, v.clone()));
            }
        }

        for (key, values) in [
            ("colors", &props.colors),
            ("materials", &props.materials),
            ("styles", &props.styles),
            ("features", &props.features),
            ("brand", &props.brand),
        ] {
            for v in values {
                entries.push(FacetEntry::new(key, v.clone()));
            }
        }
    }

    /// The materialized facet values of one product.
    ///
    /// Absent attributes are skipped, never counted as an implicit "none".
    /// A rating or price of exactly 0 counts as "not supplied" and is
    /// skipped as well, so histograms only ever hold real observations.
    #[must_use]
    pub fn facet_entries(&self, product: &Product) -> Vec<FacetEntry> {
        let props = &product.filterable_properties;
        let mut entries = Vec::new();
        Self::push_categorical(props, &mut entries);

        if let Some(rating) = props.user_rating {
            if rating.is_finite() && rating != 0.0 {
                entries.push(FacetEntry::new(
                    &self.rating_key,
                    self.bucketizer.rating_bucket(rating),
                ));
            }
        }
        if let Some(price) = props.price {
            if price.is_finite() && price != 0.0 {
                entries.push(FacetEntry::new("price", self.bucketizer.price_bucket(price)));
            }
        }

        entries
    }

    /// The facet values of one product as seen by the item ranker.
    ///
    /// Same enumeration as [`facet_entries`](Self::facet_entries), except the
    /// two numeric entries are always present: a missing or malformed price
    /// or rating fails closed to the `unknown` bucket instead of vanishing,
    /// so every product is scored and penalized over the same shape.
    #[must_use]
    pub fn ranking_entries(&self, product: &Product) -> Vec<FacetEntry> {
        let props = &product.filterable_properties;
        let mut entries = Vec::new();
        Self::push_categorical(props, &mut entries);

        entries.push(FacetEntry::new(
            &self.rating_key,
            self.bucketizer.rating_bucket_opt(props.user_rating),
        ));
        entries.push(FacetEntry::new(
            "price",
            self.bucketizer.price_bucket_opt(props.price),
        ));

        entries
    }

    /// Aggregate a sequence of products into a fresh histogram.
    ///
    /// Pure function of its input; every call returns a new histogram.
    #[must_use]
    pub fn collate<'a, I>(&self, products: I) -> FacetHistogram
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut histogram = FacetHistogram::new();
        for product in products {
            for entry in self.facet_entries(product) {
                histogram.increment(&entry.category, &entry.value);
            }
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::UNKNOWN_BUCKET;

    fn sofa() -> Product {
        Product::new(1u64, "Velvet Sofa").with_properties(
            FilterableProperties::new()
                .with_category("furniture")
                .with_subcategory("sofas")
                .with_product_type("loveseat")
                .with_colors(["green", "gold"])
                .with_materials(["velvet"])
                .with_brand(["Plushco"])
                .with_rating(4.5)
                .with_price(899.0),
        )
    }

    #[test]
    fn test_collate_counts_every_attribute() {
        let collator = Collator::default();
        let products = vec![sofa()];
        let hist = collator.collate(&products);

        assert_eq!(hist.count("category", "furniture"), 1);
        assert_eq!(hist.count("subcategory", "sofas"), 1);
        assert_eq!(hist.count("product_type", "loveseat"), 1);
        assert_eq!(hist.count("colors", "green"), 1);
        assert_eq!(hist.count("colors", "gold"), 1);
        assert_eq!(hist.count("materials", "velvet"), 1);
        assert_eq!(hist.count("brand", "Plushco"), 1);
        assert_eq!(hist.count("user_rating", "4 - 4.99"), 1);
        assert_eq!(hist.count("price", "$800 - $999"), 1);
    }

    #[test]
    fn test_collate_accumulates_across_products() {
        let collator = Collator::default();
        let products = vec![
            Product::new(1u64, "A")
                .with_properties(FilterableProperties::new().with_colors(["red"])),
            Product::new(2u64, "B")
                .with_properties(FilterableProperties::new().with_colors(["red", "blue"])),
        ];
        let hist = collator.collate(&products);

        assert_eq!(hist.count("colors", "red"), 2);
        assert_eq!(hist.count("colors", "blue"), 1);
    }

    #[test]
    fn test_collate_empty_input() {
        let hist = Collator::default().collate(&[]);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_absent_attributes_are_skipped() {
        let collator = Collator::default();
        let products = vec![Product::new(1u64, "Bare")];
        let hist = collator.collate(&products);

        // nothing to count: no implicit "none" buckets, no numeric buckets
        assert!(hist.is_empty());
    }

    #[test]
    fn test_zero_rating_and_price_count_as_missing() {
        let collator = Collator::default();
        let products = vec![Product::new(1u64, "Freebie").with_properties(
            FilterableProperties::new()
                .with_category("misc")
                .with_rating(0.0)
                .with_price(0.0),
        )];
        let hist = collator.collate(&products);

        assert_eq!(hist.count("category", "misc"), 1);
        assert!(hist.category("user_rating").is_none());
        assert!(hist.category("price").is_none());
    }

    #[test]
    fn test_configurable_rating_key() {
        let collator = Collator::default().with_rating_key("rating");
        let products =
            vec![Product::new(1u64, "A")
                .with_properties(FilterableProperties::new().with_rating(3.0))];
        let hist = collator.collate(&products);

        assert_eq!(hist.count("rating", "3 - 3.99"), 1);
        assert!(hist.category("user_rating").is_none());
    }

    #[test]
    fn test_ranking_entries_always_carry_numeric_buckets() {
        let collator = Collator::default();
        let bare = Product::new(1u64, "Bare");
        let entries = collator.ranking_entries(&bare);

        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .any(|e| e.category == "user_rating" && e.value == UNKNOWN_BUCKET));
        assert!(entries
            .iter()
            .any(|e| e.category == "price" && e.value == UNKNOWN_BUCKET));
    }

    #[test]
    fn test_ranking_entries_bucket_present_zero_normally() {
        // unlike collation, a present 0 price is a real value to the ranker
        let collator = Collator::default();
        let freebie = Product::new(1u64, "Freebie")
            .with_properties(FilterableProperties::new().with_price(0.0));
        let entries = collator.ranking_entries(&freebie);

        assert!(entries
            .iter()
            .any(|e| e.category == "price" && e.value == "$0 - $199"));
    }

    #[test]
    fn test_facet_entries_match_collation() {
        let collator = Collator::default();
        let product = sofa();
        let from_entries = {
            let mut hist = FacetHistogram::new();
            for entry in collator.facet_entries(&product) {
                hist.increment(&entry.category, &entry.value);
            }
            hist
        };
        let collated = collator.collate(std::iter::once(&product));

        assert_eq!(from_entries, collated);
    }
}
