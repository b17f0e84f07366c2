//! GitHub REST client for the followers endpoint.

mod client;
mod error;

pub use client::{followers_url, FollowerClient};
pub use error::FetchError;
