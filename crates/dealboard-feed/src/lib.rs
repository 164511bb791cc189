pub mod client;
pub mod error;
pub mod normalize;
pub mod source;
pub mod types;

pub use client::OffersClient;
pub use error::FeedError;
pub use normalize::normalize_feeds;
pub use source::OfferSource;
pub use types::{RawProduct, StoreFeed};
