use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::{Defaults, GithubConfig};
use crate::followers::{decode_followers, FollowerRecord};
use crate::github::error::FetchError;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Body GitHub sends alongside error statuses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Fetches one page of followers for a fixed account.
///
/// Each call to [`FollowerClient::fetch_followers`] issues exactly one GET.
/// There is no retry and no caching.
#[derive(Debug, Clone)]
pub struct FollowerClient {
    client: Client,
    url: Url,
    account: String,
}

impl FollowerClient {
    pub fn new(github: &GithubConfig, defaults: &Defaults) -> Result<Self, FetchError> {
        let url = followers_url(&github.api_base_url, &github.account, github.per_page)?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(defaults.timeout_seconds as u64))
            .user_agent(github.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url,
            account: github.account.clone(),
        })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// The exact URL requested by `fetch_followers`.
    pub fn followers_url(&self) -> &Url {
        &self.url
    }

    /// Fetch the current page of followers, in server order.
    pub async fn fetch_followers(&self) -> Result<Vec<FollowerRecord>, FetchError> {
        tracing::debug!(url = %self.url, "Requesting followers");

        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .await
            .map_err(|source| {
                tracing::warn!(account = %self.account, error = %source, "Followers request failed");
                FetchError::Network { source }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network { source })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .map(|b| b.message);
            tracing::warn!(
                account = %self.account,
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "Followers request rejected"
            );
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let followers = decode_followers(&body).inspect_err(|err| {
            tracing::warn!(account = %self.account, error = %err, "Followers body undecodable");
        })?;

        tracing::info!(
            account = %self.account,
            count = followers.len(),
            "Followers fetched"
        );
        Ok(followers)
    }
}

/// Build `{base}/users/{account}/followers?per_page={per_page}`.
///
/// The account is appended as a single percent-encoded path segment.
pub fn followers_url(base: &str, account: &str, per_page: u32) -> Result<Url, FetchError> {
    let mut url = Url::parse(base)
        .map_err(|e| FetchError::InvalidRequest(format!("Invalid API base URL '{}': {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidRequest(format!("API base URL '{}' cannot be a base", base)))?
        .pop_if_empty()
        .extend(["users", account, "followers"]);
    url.query_pairs_mut()
        .clear()
        .append_pair("per_page", &per_page.to_string());

    Ok(url)
}
