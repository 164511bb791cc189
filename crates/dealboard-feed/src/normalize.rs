//! Normalization from raw [`StoreFeed`]s to [`dealboard_core::Offer`]s.
//!
//! Output order is store order as received, then product order within each
//! store. Nothing is sorted or filtered here.

use std::collections::HashMap;

use dealboard_core::Offer;

use crate::error::FeedError;
use crate::types::{RawProduct, StoreFeed};

/// Flattens store feeds into offers, attaching the supermarket and computing
/// the discount of every product.
///
/// Repeated `(name, supermarket)` pairs are kept; each repeat gets the next
/// `occurrence` number so display keys stay unique.
///
/// # Errors
///
/// Returns [`FeedError::Normalization`] for the first malformed record. The
/// whole batch is rejected; no partial result is returned.
pub fn normalize_feeds(feeds: Vec<StoreFeed>) -> Result<Vec<Offer>, FeedError> {
    let mut offers = Vec::with_capacity(feeds.iter().map(|f| f.products.len()).sum());
    let mut seen: HashMap<(String, String), u32> = HashMap::new();

    for feed in feeds {
        if feed.supermarket.trim().is_empty() {
            return Err(FeedError::Normalization {
                supermarket: feed.supermarket,
                index: 0,
                reason: "supermarket name is empty".into(),
            });
        }

        for (index, product) in feed.products.into_iter().enumerate() {
            let offer = normalize_product(product, &feed.supermarket, index)?;

            let count = seen
                .entry((offer.supermarket().to_owned(), offer.name().to_owned()))
                .or_insert(0);
            if *count > 0 {
                tracing::warn!(
                    supermarket = %offer.supermarket(),
                    name = %offer.name(),
                    occurrence = *count,
                    "duplicate offer in feed"
                );
            }
            let occurrence = *count;
            *count += 1;

            offers.push(offer.with_occurrence(occurrence));
        }
    }

    Ok(offers)
}

/// Normalizes one [`RawProduct`] belonging to `supermarket`.
///
/// # Errors
///
/// Returns [`FeedError::Normalization`] if `name` or `price` is missing, or
/// a price is negative or not a finite number.
fn normalize_product(
    product: RawProduct,
    supermarket: &str,
    index: usize,
) -> Result<Offer, FeedError> {
    let reject = |reason: String| FeedError::Normalization {
        supermarket: supermarket.to_owned(),
        index,
        reason,
    };

    let name = product
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| reject("missing name".into()))?;

    let price = product
        .price
        .ok_or_else(|| reject(format!("\"{name}\" has no price")))?;
    if !price.is_finite() || price < 0.0 {
        return Err(reject(format!("\"{name}\" has invalid price {price}")));
    }

    if let Some(old) = product.old_price {
        if !old.is_finite() || old < 0.0 {
            return Err(reject(format!("\"{name}\" has invalid oldPrice {old}")));
        }
    }

    Ok(Offer::new(name, supermarket, price, product.old_price)
        .with_quantity(product.quantity)
        .with_category(product.category)
        .with_pic_url(product.pic_url)
        .with_validity(product.valid_from, product.valid_until))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
