use crate::followers::FollowerRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FollowerListIntent {
    /// Append a character to the search query.
    QueryInput(char),
    QueryBackspace,
    QueryClear,
    /// The one fetch for this view completed with records.
    FetchSucceeded(Vec<FollowerRecord>),
    /// The fetch failed. The stored collection is left as is.
    FetchFailed(String),
    MoveUp,
    MoveDown,
}

impl Intent for FollowerListIntent {}
