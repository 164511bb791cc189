#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Offers endpoint, e.g. `"https://example.workers.dev/products"`.
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Auto-advance period of the top-deals rotation.
    pub rotation_interval_secs: u64,
    pub top_deals_limit: usize,
    /// Width fed to the viewport classifier before the first resize.
    pub display_width: u32,
}
