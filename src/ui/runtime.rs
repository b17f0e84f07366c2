use crate::github::FollowerClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch::FetchTask;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the follower screen until the user quits.
///
/// The fetch is spawned once, on `runtime`, when the screen opens.
pub fn run(client: FollowerClient, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let mut app = App::new(client.account());
    let events = EventHandler::new(tick_rate);
    app.attach_fetch(FetchTask::spawn(runtime, client, events.sender()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Fetched(result)) => app.on_fetch_result(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Aborts a fetch that is still in flight.
    drop(app);
    drop(guard);
    Ok(())
}
