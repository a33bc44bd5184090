use crate::app::state::{AppState, Mode, Panel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Paragraph::new(help_line(state)), area);
}

fn help_line(state: &AppState) -> Line<'static> {
    match (state.mode(), state.active_panel) {
        (Mode::ConfirmPending, _) => {
            Line::styled(" Press y/enter to confirm • n/esc to cancel", Theme::hint())
        }
        (Mode::Adding, Panel::Todo) => Line::styled(
            " Type todo title • enter to save • esc to cancel",
            Theme::hint(),
        ),
        (Mode::Adding, Panel::Timer) => Line::styled(
            " Type timer name • enter to save • esc to cancel",
            Theme::hint(),
        ),
        (Mode::Normal, panel) => {
            let mut bindings = vec![
                ("tab/h/l", "switch tabs"),
                ("n", "add"),
                ("d", "delete"),
                ("j/k/↑/↓", "navigate"),
            ];
            match panel {
                Panel::Todo => bindings.push(("space/enter", "toggle")),
                Panel::Timer => {
                    bindings.push(("space/enter", "start/stop"));
                    bindings.push(("r", "reset"));
                }
            }
            bindings.push(("q", "quit"));

            let mut spans = vec![Span::raw(" ")];
            for (i, (key, what)) in bindings.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" • ", Theme::hint()));
                }
                spans.push(Span::styled(key, Theme::help_key()));
                spans.push(Span::styled(format!(" {}", what), Theme::hint()));
            }
            Line::from(spans)
        }
    }
}
