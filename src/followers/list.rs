//! Follower collection with a derived, query-filtered view.

use crate::followers::record::FollowerRecord;

/// Owns the fetched follower collection and the current search query.
///
/// The filtered view is a pure function of `(followers, query)` and is
/// recomputed on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowerListModel {
    followers: Vec<FollowerRecord>,
    query: String,
    /// Bumped on every `set_followers`, even when the new collection is equal.
    version: u64,
}

impl FollowerListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored collection wholesale.
    pub fn set_followers(&mut self, followers: Vec<FollowerRecord>) {
        self.followers = followers;
        self.version = self.version.wrapping_add(1);
    }

    /// Replace the current query. The empty string means "no filter".
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn followers(&self) -> &[FollowerRecord] {
        &self.followers
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Followers whose login contains the query, ignoring case, in stored order.
    ///
    /// With an empty query the whole collection is returned.
    pub fn filtered_followers(&self) -> Vec<&FollowerRecord> {
        if self.query.is_empty() {
            return self.followers.iter().collect();
        }

        let needle = self.query.to_lowercase();
        self.followers
            .iter()
            .filter(|follower| follower.login.to_lowercase().contains(&needle))
            .collect()
    }
}
