use crate::ui::app::App;
use crate::ui::list::FollowerListIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.dispatch(FollowerListIntent::QueryClear);
        return;
    }

    let intent = match key.code {
        KeyCode::Up => FollowerListIntent::MoveUp,
        KeyCode::Down => FollowerListIntent::MoveDown,
        KeyCode::Backspace => FollowerListIntent::QueryBackspace,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            FollowerListIntent::QueryInput(ch)
        }
        _ => return,
    };
    app.dispatch(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
