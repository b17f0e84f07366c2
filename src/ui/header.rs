use crate::ui::list::{FollowerListState, LoadStatus};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct Header<'a> {
    account: &'a str,
    list: &'a FollowerListState,
    tick: usize,
}

impl<'a> Header<'a> {
    pub fn new(account: &'a str, list: &'a FollowerListState, tick: usize) -> Self {
        Self {
            account,
            list,
            tick,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, status_text, status_color) = match &self.list.status {
            LoadStatus::Loading => (
                SPINNER[self.tick % SPINNER.len()],
                "Loading…".to_string(),
                STATUS_PENDING,
            ),
            LoadStatus::Loaded { count } => ("●", loaded_text(*count, self.list), STATUS_OK),
            LoadStatus::Failed { message } => ("●", message.clone(), STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Followers",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("@{}", self.account), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(indicator, Style::default().fg(status_color)),
            Span::styled(" ", text_style),
            Span::styled(status_text, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn loaded_text(count: usize, list: &FollowerListState) -> String {
    if list.model.query().is_empty() {
        format!("{} followers", count)
    } else {
        format!("{} of {} followers", list.visible().len(), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::followers::FollowerRecord;

    #[test]
    fn loaded_text_reports_matches_when_filtering() {
        let mut list = FollowerListState::default();
        list.model.set_followers(vec![
            FollowerRecord {
                id: 1,
                login: "Ada".to_string(),
                avatar_url: String::new(),
            },
            FollowerRecord {
                id: 2,
                login: "Bob".to_string(),
                avatar_url: String::new(),
            },
        ]);
        assert_eq!(loaded_text(2, &list), "2 followers");

        list.model.set_query("ad");
        assert_eq!(loaded_text(2, &list), "1 of 2 followers");
    }
}
