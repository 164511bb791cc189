/// A single promotional product, normalized across supermarkets.
///
/// Built with [`Offer::new`], which derives `discount` from `price` and
/// `old_price` via [`compute_discount`]. The pricing fields are read-only
/// afterwards, so the discount always agrees with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    name: String,
    supermarket: String,
    price: f64,
    old_price: Option<f64>,
    discount: u8,
    quantity: Option<String>,
    category: Option<String>,
    pic_url: Option<String>,
    valid_from: Option<String>,
    valid_until: Option<String>,
    occurrence: u32,
}

impl Offer {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        supermarket: impl Into<String>,
        price: f64,
        old_price: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            supermarket: supermarket.into(),
            price,
            old_price,
            discount: compute_discount(price, old_price),
            quantity: None,
            category: None,
            pic_url: None,
            valid_from: None,
            valid_until: None,
            occurrence: 0,
        }
    }

    /// Display text such as `"500 g"`. Never parsed as a number.
    #[must_use]
    pub fn with_quantity(mut self, quantity: Option<String>) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_pic_url(mut self, pic_url: Option<String>) -> Self {
        self.pic_url = pic_url;
        self
    }

    #[must_use]
    pub fn with_validity(mut self, from: Option<String>, until: Option<String>) -> Self {
        self.valid_from = from;
        self.valid_until = until;
        self
    }

    /// 0 for the first `(name, supermarket)` pair in a fetch, 1 for its
    /// first repeat, and so on.
    #[must_use]
    pub fn with_occurrence(mut self, occurrence: u32) -> Self {
        self.occurrence = occurrence;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn supermarket(&self) -> &str {
        &self.supermarket
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn old_price(&self) -> Option<f64> {
        self.old_price
    }

    /// Whole percent in `0..=100`.
    #[must_use]
    pub fn discount(&self) -> u8 {
        self.discount
    }

    #[must_use]
    pub fn quantity(&self) -> Option<&str> {
        self.quantity.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn pic_url(&self) -> Option<&str> {
        self.pic_url.as_deref()
    }

    #[must_use]
    pub fn valid_from(&self) -> Option<&str> {
        self.valid_from.as_deref()
    }

    #[must_use]
    pub fn valid_until(&self) -> Option<&str> {
        self.valid_until.as_deref()
    }

    #[must_use]
    pub fn occurrence(&self) -> u32 {
        self.occurrence
    }

    /// Returns `true` when the offer is priced below its reference price.
    #[must_use]
    pub fn is_deal(&self) -> bool {
        self.discount > 0
    }

    /// Case-insensitive substring match on the offer name. An empty needle
    /// matches everything.
    #[must_use]
    pub fn name_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Computes the whole-percent discount of `price` relative to `old_price`.
///
/// Returns 0 when there is no reference price or the current price is not
/// lower. Halves round up.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_discount(price: f64, old_price: Option<f64>) -> u8 {
    let Some(old) = old_price else {
        return 0;
    };
    if old <= 0.0 || price >= old || !price.is_finite() || !old.is_finite() {
        return 0;
    }

    // Clamped to 0..=100, so the cast cannot truncate.
    ((old - price) / old * 100.0).round().clamp(0.0, 100.0) as u8
}
