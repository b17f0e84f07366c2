use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 3;
pub const SEARCH_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split the screen into header, search bar, list body and footer.
///
/// Fixed rows shrink first from the bottom when the terminal is too short.
pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let search_height = SEARCH_HEIGHT.min(area.height.saturating_sub(header_height));
    let footer_height =
        FOOTER_HEIGHT.min(area.height.saturating_sub(header_height + search_height));
    let body_height = area
        .height
        .saturating_sub(header_height + search_height + footer_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let search = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: search_height,
    };
    let body = Rect {
        x: area.x,
        y: search.y + search_height,
        width: area.width,
        height: body_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };

    Regions {
        header,
        search,
        body,
        footer,
    }
}
