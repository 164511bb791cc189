//! Ranking and filtering over the normalized offer collection.
//!
//! The baseline collection is sorted by discount once per fetch
//! ([`sort_by_discount`]); [`main_view`] and [`top_deals`] are both derived
//! from that baseline.

use crate::offers::Offer;

/// User-controlled filters for the main listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Case-insensitive substring of the offer name. Empty matches all.
    pub search: String,
    /// Exact supermarket name. `None` matches all.
    pub supermarket: Option<String>,
}

impl Filter {
    #[must_use]
    pub fn matches(&self, offer: &Offer) -> bool {
        offer.name_matches(&self.search)
            && self
                .supermarket
                .as_deref()
                .is_none_or(|store| offer.supermarket() == store)
    }
}

/// Sorts offers by discount, highest first. Equal discounts keep their
/// normalization order.
pub fn sort_by_discount(offers: &mut [Offer]) {
    // `sort_by` is stable.
    offers.sort_by(|a, b| b.discount().cmp(&a.discount()));
}

/// Offers matching `filter`, in baseline order.
#[must_use]
pub fn main_view<'a>(offers: &'a [Offer], filter: &Filter) -> Vec<&'a Offer> {
    offers.iter().filter(|o| filter.matches(o)).collect()
}

/// The highest-discount offers with a positive discount, capped at `limit`.
///
/// Does not assume `offers` is already sorted.
#[must_use]
pub fn top_deals(offers: &[Offer], limit: usize) -> Vec<Offer> {
    let mut deals: Vec<Offer> = offers.iter().filter(|o| o.is_deal()).cloned().collect();
    sort_by_discount(&mut deals);
    deals.truncate(limit);
    deals
}

/// Distinct supermarket names in order of first appearance.
#[must_use]
pub fn store_names(offers: &[Offer]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for offer in offers {
        if !names.iter().any(|n| n == offer.supermarket()) {
            names.push(offer.supermarket().to_owned());
        }
    }
    names
}
