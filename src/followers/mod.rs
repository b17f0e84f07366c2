//! Follower records and the searchable list model built over them.

mod list;
mod record;

pub use list::FollowerListModel;
pub use record::{decode_followers, FollowerRecord};
