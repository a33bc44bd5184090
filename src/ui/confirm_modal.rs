use crate::app::gate::ConfirmationGate;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: u16 = 40;
// Borders + padding around the text.
const FRAME_WIDTH: u16 = 6;

pub fn render(frame: &mut Frame, gate: &ConfirmationGate) {
    let Some(message) = gate.message() else {
        return;
    };

    let area = frame.area();
    let text_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
    let width = text_width
        .saturating_add(FRAME_WIDTH)
        .max(MIN_WIDTH)
        .min(area.width.saturating_sub(2));
    let popup = centered_rect(width, 9, area);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::modal_border())
        .padding(Padding::new(2, 2, 1, 1))
        .style(Theme::modal());

    let lines = vec![
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::raw("Press 'y' or Enter to confirm"),
        Line::raw("Press 'n' or Esc to cancel"),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Theme::modal())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}
