use crate::app::editor::ListEditor;
use crate::app::item::TimerItem;
use crate::ui::add_prompt;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, timers: &ListEditor<TimerItem>) {
    if timers.is_adding() {
        add_prompt::render(frame, area, "Add new timer:", "Name: ", timers.input());
        return;
    }

    if timers.items().is_empty() {
        let empty = Paragraph::new(Line::styled(
            " No timers yet. Press 'n' to add one!",
            Theme::hint(),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = timers
        .items()
        .iter()
        .enumerate()
        .map(|(i, timer)| {
            let name_style = if i == timers.selected() {
                Theme::selected()
            } else {
                Theme::timer_name()
            };
            let status = if timer.running { "Running" } else { "Stopped" };
            ListItem::new(vec![
                Line::from(vec![Span::raw(" "), Span::styled(timer.name.as_str(), name_style)]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(status, Theme::timer_status(timer.running)),
                    Span::styled(" • ", Theme::hint()),
                    Span::styled(timer.clock(), Theme::timer_clock(timer.running)),
                ]),
                Line::raw(""),
            ])
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(timers.selected()));
    frame.render_stateful_widget(List::new(rows), area, &mut list_state);
}
