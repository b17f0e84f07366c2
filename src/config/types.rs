use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub github: GithubConfig,
}

/// Network defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where followers are fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Account whose followers are listed.
    #[serde(default = "default_account")]
    pub account: String,
    /// REST API root (e.g., "https://api.github.com").
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Page size sent as `per_page`. GitHub caps it at 100.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// GitHub rejects requests without a User-Agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

pub const MAX_PER_PAGE: u32 = 100;

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_account() -> String {
    "xuebusi".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_user_agent() -> String {
    format!("ghfollowers/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            account: default_account(),
            api_base_url: default_api_base_url(),
            per_page: default_per_page(),
            user_agent: default_user_agent(),
        }
    }
}
