use crate::ui::list::intent::FollowerListIntent;
use crate::ui::list::state::{FollowerListState, LoadStatus};
use crate::ui::mvi::Reducer;

pub struct FollowerListReducer;

impl Reducer for FollowerListReducer {
    type State = FollowerListState;
    type Intent = FollowerListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FollowerListIntent::QueryInput(ch) => {
                let mut query = state.model.query().to_string();
                query.push(ch);
                state.model.set_query(query);
                state.selected = 0;
            }
            FollowerListIntent::QueryBackspace => {
                let mut query = state.model.query().to_string();
                if query.pop().is_some() {
                    state.model.set_query(query);
                    state.selected = 0;
                }
            }
            FollowerListIntent::QueryClear => {
                state.model.set_query(String::new());
                state.selected = 0;
            }
            FollowerListIntent::FetchSucceeded(followers) => {
                let count = followers.len();
                state.model.set_followers(followers);
                state.status = LoadStatus::Loaded { count };
            }
            FollowerListIntent::FetchFailed(message) => {
                state.status = LoadStatus::Failed { message };
            }
            FollowerListIntent::MoveUp => {
                let len = state.visible().len();
                state.selected = if state.selected == 0 {
                    len.saturating_sub(1)
                } else {
                    state.selected - 1
                };
            }
            FollowerListIntent::MoveDown => {
                let len = state.visible().len();
                state.selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
            }
        }

        let len = state.visible().len();
        state.selected = state.selected.min(len.saturating_sub(1));
        state
    }
}
