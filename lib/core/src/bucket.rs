//! Range bucketization for continuous attributes
//!
//! Maps prices and ratings to discrete, labeled ranges so they can be
//! counted and filtered like any other facet value. Bucket boundaries are
//! pure functions of the input; the same [`Bucketizer`] must be shared by
//! collation and ranking so both sides agree on every label.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sentinel label for a missing or malformed numeric attribute
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Default price bucket width in currency units
pub const DEFAULT_PRICE_WIDTH: u64 = 200;

/// Computes range-bucket labels for prices and ratings.
///
/// Price buckets are half-open intervals of a configurable width, labeled
/// `"$<min> - $<max>"` with `max = min + width - 1`. Rating buckets are
/// unit-width and floor-aligned, labeled `"<floor(r)> - <floor(r)>.99"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucketizer {
    price_width: u64,
}

impl Default for Bucketizer {
    fn default() -> Self {
        Self {
            price_width: DEFAULT_PRICE_WIDTH,
        }
    }
}

impl Bucketizer {
    pub fn new(price_width: u64) -> Result<Self> {
        if price_width == 0 {
            return Err(Error::InvalidConfig(
                "price bucket width must be non-zero".to_string(),
            ));
        }
        Ok(Self { price_width })
    }

    #[inline]
    #[must_use]
    pub fn price_width(&self) -> u64 {
        self.price_width
    }

    /// Bucket label for a price.
    ///
    /// Total over non-negative finite prices; anything else fails closed to
    /// [`UNKNOWN_BUCKET`].
    #[must_use]
    pub fn price_bucket(&self, price: f64) -> String {
        if !price.is_finite() || price < 0.0 {
            return UNKNOWN_BUCKET.to_string();
        }
        let min = (price / self.price_width as f64).floor() as u64 * self.price_width;
        let max = min + self.price_width - 1;
        format!("${} - ${}", min, max)
    }

    /// Bucket label for a rating.
    ///
    /// Total over non-negative finite ratings; anything else fails closed to
    /// [`UNKNOWN_BUCKET`].
    #[must_use]
    pub fn rating_bucket(&self, rating: f64) -> String {
        if !rating.is_finite() || rating < 0.0 {
            return UNKNOWN_BUCKET.to_string();
        }
        let min = rating.floor() as u64;
        format!("{} - {}.99", min, min)
    }

    #[must_use]
    pub fn price_bucket_opt(&self, price: Option<f64>) -> String {
        match price {
            Some(p) => self.price_bucket(p),
            None => UNKNOWN_BUCKET.to_string(),
        }
    }

    #[must_use]
    pub fn rating_bucket_opt(&self, rating: Option<f64>) -> String {
        match rating {
            Some(r) => self.rating_bucket(r),
            None => UNKNOWN_BUCKET.to_string(),
        }
    }
}
