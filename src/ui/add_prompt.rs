use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Inline text entry shown in place of a list while adding an item.
pub fn render(frame: &mut Frame, area: Rect, heading: &str, prompt: &str, input: &str) {
    let lines = vec![
        Line::raw(""),
        Line::styled(format!(" {}", heading), Theme::title()),
        Line::from(vec![
            Span::styled(format!("  {}", prompt), Theme::hint()),
            Span::styled(input, Theme::input_text()),
            Span::styled("│", Style::default().fg(Theme::ACCENT)),
        ]),
        Line::raw(""),
        Line::styled("  Press Enter to add, Esc to cancel", Theme::hint()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
