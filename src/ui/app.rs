use crate::followers::FollowerRecord;
use crate::github::FetchError;
use crate::ui::fetch::FetchTask;
use crate::ui::list::{FollowerListIntent, FollowerListReducer, FollowerListState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    account: String,
    /// Follower list screen state (MVI pattern).
    list: FollowerListState,
    /// Fetch handle (resource, managed outside MVI). Aborted when the app drops.
    fetch: Option<FetchTask>,
    tick: usize,
}

impl App {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            account: account.into(),
            list: FollowerListState::default(),
            fetch: None,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn list(&self) -> &FollowerListState {
        &self.list
    }

    /// Ticks since start; drives the loading spinner.
    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn on_tick(&mut self) {
        if self.list.is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn attach_fetch(&mut self, task: FetchTask) {
        self.fetch = Some(task);
    }

    /// True while the attached fetch has not delivered its result.
    pub fn is_fetching(&self) -> bool {
        self.fetch.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn dispatch(&mut self, intent: FollowerListIntent) {
        dispatch_mvi!(self, list, FollowerListReducer, intent);
    }

    /// Apply the fetch result. On failure the stored followers stay as they were.
    pub fn on_fetch_result(&mut self, result: Result<Vec<FollowerRecord>, FetchError>) {
        self.fetch = None;
        match result {
            Ok(followers) => self.dispatch(FollowerListIntent::FetchSucceeded(followers)),
            Err(err) => {
                tracing::warn!(
                    account = %self.account,
                    error_type = err.error_type(),
                    error = %err,
                    "Follower fetch failed"
                );
                let message = format!("{}: {}", err.user_message(), err);
                self.dispatch(FollowerListIntent::FetchFailed(message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::list::LoadStatus;

    fn record(id: u64, login: &str) -> FollowerRecord {
        FollowerRecord {
            id,
            login: login.to_string(),
            avatar_url: String::new(),
        }
    }

    #[test]
    fn failed_fetch_keeps_empty_collection() {
        let mut app = App::new("octocat");
        app.on_fetch_result(Err(FetchError::HttpStatus {
            status: 404,
            message: Some("Not Found".to_string()),
        }));

        assert!(app.list().model.followers().is_empty());
        assert_eq!(
            app.list().status,
            LoadStatus::Failed {
                message: "Account not found: HTTP 404: Not Found".to_string()
            }
        );
    }

    #[test]
    fn successful_fetch_populates_list() {
        let mut app = App::new("octocat");
        app.on_fetch_result(Ok(vec![record(1, "Ada"), record(2, "Bob")]));
        assert_eq!(app.list().status, LoadStatus::Loaded { count: 2 });
        assert_eq!(app.list().visible().len(), 2);
    }

    #[test]
    fn spinner_only_advances_while_loading() {
        let mut app = App::new("octocat");
        app.on_tick();
        app.on_tick();
        assert_eq!(app.tick(), 2);

        app.on_fetch_result(Ok(Vec::new()));
        app.on_tick();
        assert_eq!(app.tick(), 2);
    }

    #[test]
    fn quit_flag() {
        let mut app = App::new("octocat");
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
        assert_eq!(app.account(), "octocat");
        assert!(!app.is_fetching());
    }
}
