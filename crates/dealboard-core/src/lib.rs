pub mod app_config;
pub mod board;
pub mod config;
pub mod offers;
pub mod partition;
pub mod ranking;
pub mod rotation;
pub mod viewport;

pub use app_config::{AppConfig, Environment};
pub use board::{Board, DisplayState, FetchRequest, Intent};
pub use config::{load_app_config, load_app_config_from_env};
pub use offers::{compute_discount, Offer};
pub use partition::partition;
pub use ranking::{main_view, sort_by_discount, store_names, top_deals, Filter};
pub use rotation::{Direction, Rotation};
pub use viewport::Breakpoint;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
