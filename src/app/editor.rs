use crate::app::item::{ListItem, TimerItem};

/// An ordered list with a selection cursor and an inline "add" prompt.
///
/// `selected` is always a valid index while the list is non-empty and `0`
/// when it is empty. Every operation is total: out-of-range requests and
/// unacceptable characters are dropped without error.
#[derive(Debug, Clone)]
pub struct ListEditor<T> {
    items: Vec<T>,
    selected: usize,
    adding: bool,
    input: String,
}

impl<T> Default for ListEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListEditor<T> {
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            selected: 0,
            adding: false,
            input: String::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.adding = true;
        self.input.clear();
    }

    /// Only printable ASCII (space through `~`) is accepted.
    pub fn append_char(&mut self, c: char) {
        if matches!(c, ' '..='~') {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn cancel_add(&mut self) {
        self.adding = false;
        self.input.clear();
    }

    pub fn delete_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        if self.items.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
        Some(removed)
    }
}

impl<T: ListItem> ListEditor<T> {
    /// Leaves add mode; appends an item only if the trimmed input is non-empty.
    pub fn commit_add(&mut self) -> bool {
        let text = self.input.trim();
        let appended = !text.is_empty();
        if appended {
            self.items.push(T::from_text(text));
        }
        self.cancel_add();
        appended
    }

    pub fn toggle_selected(&mut self) {
        if let Some(item) = self.items.get_mut(self.selected) {
            item.toggle();
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_item().map(ListItem::label)
    }
}

impl ListEditor<TimerItem> {
    /// Advance every running timer by one second. Returns whether any ran.
    pub fn tick(&mut self) -> bool {
        self.items
            .iter_mut()
            .fold(false, |any, timer| timer.tick() || any)
    }

    pub fn reset_selected(&mut self) {
        if let Some(timer) = self.items.get_mut(self.selected) {
            timer.reset();
        }
    }
}
