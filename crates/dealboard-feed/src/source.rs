use std::future::Future;

use dealboard_core::Offer;

use crate::client::OffersClient;
use crate::error::FeedError;
use crate::normalize::normalize_feeds;
use crate::types::StoreFeed;

/// A place store feeds can be read from.
///
/// [`OffersClient`] is the production implementation; tests substitute
/// in-memory sources.
pub trait OfferSource {
    /// Reads every store's product list once.
    fn fetch(
        &self,
        offers_only: bool,
    ) -> impl Future<Output = Result<Vec<StoreFeed>, FeedError>> + Send;

    /// Reads and normalizes in one step. A malformed record fails the whole
    /// read, the same as a transport error.
    fn fetch_offers(
        &self,
        offers_only: bool,
    ) -> impl Future<Output = Result<Vec<Offer>, FeedError>> + Send
    where
        Self: Sync,
    {
        async move { normalize_feeds(self.fetch(offers_only).await?) }
    }
}

impl OfferSource for OffersClient {
    fn fetch(
        &self,
        offers_only: bool,
    ) -> impl Future<Output = Result<Vec<StoreFeed>, FeedError>> + Send {
        self.fetch_feeds(offers_only)
    }
}
