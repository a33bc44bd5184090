use std::time::Duration;

/// Behaviour shared by everything a [`ListEditor`](super::editor::ListEditor)
/// can hold.
pub trait ListItem {
    /// Build a fresh item from already-trimmed, non-empty user input.
    fn from_text(text: &str) -> Self;

    /// Text shown for the item, also used in the delete confirmation.
    fn label(&self) -> &str;

    /// The item's primary on/off switch.
    fn toggle(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub title: String,
    pub completed: bool,
}

impl ListItem for TodoItem {
    fn from_text(text: &str) -> Self {
        Self {
            title: text.to_string(),
            completed: false,
        }
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerItem {
    pub name: String,
    pub elapsed: Duration,
    pub running: bool,
}

impl TimerItem {
    /// Advance by one tick if running. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed += Duration::from_secs(1);
        }
        self.running
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// `MM:SS`, minutes are not wrapped at the hour.
    pub fn clock(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl ListItem for TimerItem {
    fn from_text(text: &str) -> Self {
        Self {
            name: text.to_string(),
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn toggle(&mut self) {
        self.running = !self.running;
    }
}
