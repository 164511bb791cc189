//! In-memory data source and fixtures shared by the CLI unit tests.

use std::future::Future;
use std::sync::Mutex;

use dealboard_core::Offer;
use dealboard_feed::{FeedError, OfferSource, RawProduct, StoreFeed};

pub(crate) struct FakeSource {
    feeds: Mutex<Vec<StoreFeed>>,
    fail: bool,
    calls: Mutex<Vec<bool>>,
}

impl FakeSource {
    pub fn new(feeds: Vec<StoreFeed>) -> Self {
        Self {
            feeds: Mutex::new(feeds),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    /// The `offers_only` flag of every fetch so far.
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

impl OfferSource for FakeSource {
    fn fetch(
        &self,
        offers_only: bool,
    ) -> impl Future<Output = Result<Vec<StoreFeed>, FeedError>> + Send {
        self.calls.lock().unwrap().push(offers_only);
        let result = if self.fail {
            Err(FeedError::NotFound {
                url: "http://fake.invalid/products".to_owned(),
            })
        } else {
            Ok(self.feeds.lock().unwrap().clone())
        };
        std::future::ready(result)
    }
}

pub(crate) fn feed(supermarket: &str, products: &[(&str, f64, Option<f64>)]) -> StoreFeed {
    StoreFeed {
        supermarket: supermarket.to_owned(),
        products: products
            .iter()
            .map(|&(name, price, old_price)| RawProduct {
                name: Some(name.to_owned()),
                price: Some(price),
                old_price,
                ..RawProduct::default()
            })
            .collect(),
    }
}

pub(crate) fn offer(name: &str, supermarket: &str, price: f64, old_price: Option<f64>) -> Offer {
    Offer::new(name, supermarket, price, old_price)
}

/// `n` discounted offers at one store, highest discount first.
pub(crate) fn deals(n: u32) -> Vec<Offer> {
    (0..n)
        .map(|i| offer(&format!("deal-{i}"), "Lidl", f64::from(40 + i), Some(100.0)))
        .collect()
}
