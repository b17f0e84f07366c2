use crate::followers::FollowerRecord;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::{FollowerListState, LoadStatus};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub const SEARCH_PROMPT: &str = "Search Followers";
/// Drawn where the avatar image would be.
const AVATAR_PLACEHOLDER: &str = "◉";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let list = app.list();

    frame.render_widget(
        Header::new(app.account(), list, app.tick()).widget(),
        regions.header,
    );
    draw_search(frame, list, regions.search);
    frame.render_widget(Clear, regions.body);
    draw_followers(frame, list, regions.body);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

fn draw_search(frame: &mut Frame<'_>, list: &FollowerListState, area: Rect) {
    let query = list.model.query();
    let line = if query.is_empty() {
        Line::from(Span::styled(
            SEARCH_PROMPT,
            Style::default().fg(PLACEHOLDER).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            query.to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
    };

    let block = Block::default()
        .title(Span::styled(" 🔍 ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if area.width > 2 && area.height > 2 {
        let x = area.x + 1 + cursor_offset(query, area.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Display columns taken by the query, capped at `max`.
fn cursor_offset(query: &str, max: u16) -> u16 {
    u16::try_from(query.width()).unwrap_or(u16::MAX).min(max)
}

fn draw_followers(frame: &mut Frame<'_>, list: &FollowerListState, area: Rect) {
    if area.height == 0 {
        return;
    }

    let visible = list.visible();
    if visible.is_empty() {
        let message = empty_message(list);
        let widget = Paragraph::new(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(PLACEHOLDER),
        )));
        frame.render_widget(widget, area);
        return;
    }

    let items: Vec<ListItem> = visible.into_iter().map(follower_item).collect();
    let widget = List::new(items).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(Some(list.selected));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn follower_item(follower: &FollowerRecord) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(AVATAR_PLACEHOLDER, Style::default().fg(PLACEHOLDER)),
        Span::raw("  "),
        Span::styled(
            follower.login.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            follower.avatar_url.clone(),
            Style::default().fg(PLACEHOLDER).add_modifier(Modifier::DIM),
        ),
    ]))
}

/// Text shown in place of the list when nothing is visible.
pub fn empty_message(list: &FollowerListState) -> String {
    match &list.status {
        LoadStatus::Loading => "Loading followers…".to_string(),
        LoadStatus::Failed { .. } if list.model.followers().is_empty() => {
            "Followers could not be loaded.".to_string()
        }
        _ if !list.model.query().is_empty() => {
            format!("No followers match \"{}\".", list.model.query())
        }
        _ => "No followers yet.".to_string(),
    }
}
