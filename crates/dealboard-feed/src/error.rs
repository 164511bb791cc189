use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid offers URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("normalization error for {supermarket} product #{index}: {reason}")]
    Normalization {
        supermarket: String,
        index: usize,
        reason: String,
    },
}
