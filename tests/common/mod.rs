//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use ghfollowers::config::{Defaults, GithubConfig};
use ghfollowers::followers::FollowerRecord;
use ghfollowers::github::FollowerClient;
use std::net::TcpListener;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn test_defaults() -> Defaults {
    Defaults {
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    }
}

pub fn github_config(base_url: &str, account: &str) -> GithubConfig {
    GithubConfig {
        account: account.to_string(),
        api_base_url: base_url.to_string(),
        per_page: 100,
        user_agent: "ghfollowers-tests".to_string(),
    }
}

pub fn client_for(base_url: &str, account: &str) -> FollowerClient {
    FollowerClient::new(&github_config(base_url, account), &test_defaults())
        .expect("Failed to build client")
}

pub fn record(id: u64, login: &str) -> FollowerRecord {
    FollowerRecord {
        id,
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/u/{}?v=4", id),
    }
}

pub fn records(logins: &[&str]) -> Vec<FollowerRecord> {
    logins
        .iter()
        .enumerate()
        .map(|(i, login)| record(i as u64 + 1, login))
        .collect()
}

pub fn logins<'a>(followers: impl IntoIterator<Item = &'a FollowerRecord>) -> Vec<&'a str> {
    followers.into_iter().map(|f| f.login.as_str()).collect()
}
