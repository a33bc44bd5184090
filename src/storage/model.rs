//! On-disk record types.
//!
//! Missing keys decode to their zero values so older or hand-edited files
//! still load. Timers are always written and read back as stopped.

use crate::app::item::{TimerItem, TodoItem};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub todos: Vec<TodoRecord>,
    #[serde(default)]
    pub timers: Vec<TimerRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub elapsed_seconds: f64,
    #[serde(default)]
    pub running: bool,
}

impl From<&TodoItem> for TodoRecord {
    fn from(item: &TodoItem) -> Self {
        Self {
            title: item.title.clone(),
            completed: item.completed,
        }
    }
}

impl From<TodoRecord> for TodoItem {
    fn from(record: TodoRecord) -> Self {
        Self {
            title: record.title,
            completed: record.completed,
        }
    }
}

impl From<&TimerItem> for TimerRecord {
    fn from(item: &TimerItem) -> Self {
        Self {
            name: item.name.clone(),
            elapsed_seconds: item.elapsed.as_secs_f64(),
            running: false,
        }
    }
}

impl From<TimerRecord> for TimerItem {
    fn from(record: TimerRecord) -> Self {
        Self {
            name: record.name,
            elapsed: Duration::try_from_secs_f64(record.elapsed_seconds.max(0.0))
                .unwrap_or_default(),
            running: false,
        }
    }
}

impl AppData {
    pub fn from_items(todos: &[TodoItem], timers: &[TimerItem]) -> Self {
        Self {
            todos: todos.iter().map(TodoRecord::from).collect(),
            timers: timers.iter().map(TimerRecord::from).collect(),
        }
    }

    pub fn into_items(self) -> (Vec<TodoItem>, Vec<TimerItem>) {
        (
            self.todos.into_iter().map(TodoItem::from).collect(),
            self.timers.into_iter().map(TimerItem::from).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_is_never_written() {
        let timer = TimerItem {
            name: "Run".into(),
            elapsed: Duration::from_secs(125),
            running: true,
        };
        let record = TimerRecord::from(&timer);
        assert!(!record.running);
        assert_eq!(record.elapsed_seconds, 125.0);
    }

    #[test]
    fn test_running_is_never_loaded() {
        let timer = TimerItem::from(TimerRecord {
            name: "Run".into(),
            elapsed_seconds: 1.5,
            running: true,
        });
        assert!(!timer.running);
        assert_eq!(timer.elapsed, Duration::from_millis(1500));
    }

    #[test]
    fn test_negative_elapsed_loads_as_zero() {
        let timer = TimerItem::from(TimerRecord {
            name: "Run".into(),
            elapsed_seconds: -4.0,
            running: false,
        });
        assert_eq!(timer.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_missing_keys_default() {
        let data: AppData = serde_json::from_str(r#"{"timers":[{"name":"Run"}]}"#).unwrap();
        assert!(data.todos.is_empty());
        assert_eq!(data.timers[0].elapsed_seconds, 0.0);
        assert!(!data.timers[0].running);
    }
}
