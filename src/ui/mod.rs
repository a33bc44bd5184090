mod add_prompt;
mod confirm_modal;
mod help_bar;
mod layout;
mod tab_bar;
mod theme;
mod timer_list;
mod todo_list;

use crate::app::state::{AppState, Panel};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 8;

/// Draw the whole UI. Reads `state` only.
pub fn render(frame: &mut Frame, state: &AppState) {
    let viewport = state.viewport;
    let known = viewport.width > 0 && viewport.height > 0;
    if known && (viewport.width < MIN_WIDTH || viewport.height < MIN_HEIGHT) {
        frame.render_widget(
            Paragraph::new("Terminal too small").style(Theme::hint()),
            frame.area(),
        );
        return;
    }

    let app_layout = layout::compute_layout(frame.area());

    let title = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(" Productivity TUI", Theme::title()),
    ]);
    frame.render_widget(title, app_layout.title);
    tab_bar::render(frame, app_layout.tab_bar, state);
    match state.active_panel {
        Panel::Todo => todo_list::render(frame, app_layout.body, &state.todo),
        Panel::Timer => timer_list::render(frame, app_layout.body, &state.timer),
    }
    help_bar::render(frame, app_layout.help_bar, state);

    confirm_modal::render(frame, &state.gate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gate::DeleteTarget;
    use crate::storage::model::{AppData, TimerRecord, TodoRecord};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn sample_state() -> AppState {
        AppState::from_data(AppData {
            todos: vec![
                TodoRecord {
                    title: "Eat".into(),
                    completed: true,
                },
                TodoRecord {
                    title: "Sleep".into(),
                    completed: false,
                },
            ],
            timers: vec![TimerRecord {
                name: "Run".into(),
                elapsed_seconds: 125.0,
                running: false,
            }],
        })
    }

    #[test]
    fn test_render_todo_panel() {
        let text = render_to_string(&sample_state(), 100, 20);
        assert!(text.contains("Productivity TUI"));
        assert!(text.contains("Todo"));
        assert!(text.contains("Timer"));
        assert!(text.contains("[✓] Eat"));
        assert!(text.contains("[ ] Sleep"));
        assert!(text.contains("space/enter toggle"));
        assert!(!text.contains("reset"));
    }

    #[test]
    fn test_render_timer_panel() {
        let mut state = sample_state();
        state.switch_panel(Panel::Timer);
        let text = render_to_string(&state, 100, 20);
        assert!(text.contains("Run"));
        assert!(text.contains("Stopped • 02:05"));
        assert!(text.contains("r reset"));

        state.timer.toggle_selected();
        let text = render_to_string(&state, 100, 20);
        assert!(text.contains("Running • 02:05"));
    }

    #[test]
    fn test_render_empty_panels() {
        let mut state = AppState::new();
        assert!(render_to_string(&state, 80, 20).contains("No todos yet. Press 'n' to add one!"));
        state.switch_panel(Panel::Timer);
        assert!(render_to_string(&state, 80, 20).contains("No timers yet. Press 'n' to add one!"));
    }

    #[test]
    fn test_render_add_prompt() {
        let mut state = AppState::new();
        state.todo.enter_add_mode();
        for c in "Buy milk".chars() {
            state.todo.append_char(c);
        }
        let text = render_to_string(&state, 80, 20);
        assert!(text.contains("Add new todo:"));
        assert!(text.contains("> Buy milk│"));
        assert!(text.contains("Type todo title"));

        state.todo.cancel_add();
        state.switch_panel(Panel::Timer);
        state.timer.enter_add_mode();
        state.timer.append_char('X');
        let text = render_to_string(&state, 80, 20);
        assert!(text.contains("Name: X│"));
        assert!(text.contains("Type timer name"));
    }

    #[test]
    fn test_render_confirm_overlay() {
        let mut state = sample_state();
        state.gate.arm(
            "Delete \"Eat\"?".into(),
            DeleteTarget {
                panel: Panel::Todo,
                index: 0,
            },
        );
        let text = render_to_string(&state, 80, 24);
        assert!(text.contains("Delete \"Eat\"?"));
        assert!(text.contains("Press 'y' or Enter to confirm"));
        assert!(text.contains("Press 'n' or Esc to cancel"));
        assert!(text.contains("y/enter to confirm"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let state = sample_state();
        assert_eq!(render_to_string(&state, 60, 16), render_to_string(&state, 60, 16));
    }

    #[test]
    fn test_render_too_small() {
        let mut state = sample_state();
        state.resize(15, 5);
        let text = render_to_string(&state, 15, 5);
        assert!(text.contains("Terminal too"));
        assert!(!text.contains("Eat"));
    }
}
