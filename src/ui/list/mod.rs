mod intent;
mod reducer;
mod state;

pub use intent::FollowerListIntent;
pub use reducer::FollowerListReducer;
pub use state::{FollowerListState, LoadStatus};
