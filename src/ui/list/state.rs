use crate::followers::{FollowerListModel, FollowerRecord};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    /// Fetch in flight; the collection is treated as empty.
    #[default]
    Loading,
    Loaded {
        count: usize,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FollowerListState {
    pub model: FollowerListModel,
    pub status: LoadStatus,
    /// Index into the filtered view.
    pub selected: usize,
}

impl UiState for FollowerListState {}

impl FollowerListState {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn visible(&self) -> Vec<&FollowerRecord> {
        self.model.filtered_followers()
    }

    pub fn selected_follower(&self) -> Option<&FollowerRecord> {
        self.visible().get(self.selected).copied()
    }
}
