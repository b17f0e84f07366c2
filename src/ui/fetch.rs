//! Background follower fetch tied to the lifetime of the view.

use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::github::FollowerClient;
use crate::ui::events::AppEvent;

/// The view's single in-flight fetch.
///
/// Dropping the task aborts the request. A result that completes after the
/// event receiver is gone is dropped without touching any state.
pub struct FetchTask {
    handle: JoinHandle<()>,
}

impl FetchTask {
    pub fn spawn(runtime: &Handle, client: FollowerClient, tx: Sender<AppEvent>) -> Self {
        let handle = runtime.spawn(async move {
            let result = client.fetch_followers().await;
            if tx.send(AppEvent::Fetched(result)).is_err() {
                tracing::debug!(
                    account = %client.account(),
                    "View closed before followers arrived, discarding result"
                );
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
