//! Configuration loading for the followers client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, GithubConfig, MAX_PER_PAGE};
