//! Wire types for the offers endpoint.
//!
//! The endpoint returns a JSON array with one entry per supermarket:
//!
//! ```json
//! [
//!   {
//!     "supermarket": "Lidl",
//!     "products": [
//!       { "name": "Прясно мляко", "quantity": "1 l", "price": 1.79, "oldPrice": 2.29 }
//!     ]
//!   }
//! ]
//! ```
//!
//! Product records do not carry the supermarket; it is attached during
//! normalization. Any `discount` field on a product is ignored and always
//! recomputed from `price` and `oldPrice`.
//!
//! Required product fields (`name`, `price`) are modeled as `Option` so that
//! a missing value reaches [`crate::normalize`] and is reported with its
//! store and position rather than as an opaque serde error.

use serde::Deserialize;

/// One supermarket's product list.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreFeed {
    pub supermarket: String,
    pub products: Vec<RawProduct>,
}

/// A product record as sent by the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form size text, e.g. `"500 g"`.
    #[serde(default)]
    pub quantity: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    /// Reference price before the promotion. `null` or absent when the
    /// product is not discounted.
    #[serde(default)]
    pub old_price: Option<f64>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub pic_url: Option<String>,

    #[serde(default)]
    pub valid_from: Option<String>,

    #[serde(default)]
    pub valid_until: Option<String>,
}
