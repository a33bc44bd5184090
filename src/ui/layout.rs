use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    pub tab_bar: Rect,
    pub body: Rect,
    pub help_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title, one line of top padding
            Constraint::Length(2), // Tab bar + gap
            Constraint::Min(3),    // Active panel
            Constraint::Length(1), // Help
        ])
        .split(area);

    AppLayout {
        title: chunks[0],
        tab_bar: chunks[1],
        body: chunks[2],
        help_bar: chunks[3],
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
