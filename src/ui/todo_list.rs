use crate::app::editor::ListEditor;
use crate::app::item::TodoItem;
use crate::ui::add_prompt;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, todos: &ListEditor<TodoItem>) {
    if todos.is_adding() {
        add_prompt::render(frame, area, "Add new todo:", "> ", todos.input());
        return;
    }

    if todos.items().is_empty() {
        let empty = Paragraph::new(Line::styled(
            "  No todos yet. Press 'n' to add one!",
            Theme::hint(),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = todos
        .items()
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let checkbox = if todo.completed { "[✓]" } else { "[ ]" };
            let style = if i == todos.selected() {
                Theme::selected()
            } else if todo.completed {
                Theme::item_done()
            } else {
                Theme::item()
            };
            ListItem::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} {}", checkbox, todo.title), style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(todos.selected()));
    frame.render_stateful_widget(List::new(rows), area, &mut list_state);
}
