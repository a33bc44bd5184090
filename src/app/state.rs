use crate::app::editor::ListEditor;
use crate::app::gate::{ConfirmationGate, DeleteTarget};
use crate::app::item::{TimerItem, TodoItem};
use crate::storage::AppData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Todo,
    Timer,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Todo, Panel::Timer];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Todo => "Todo",
            Panel::Timer => "Timer",
        }
    }

    /// One step toward Timer, wrapping.
    pub fn next(self) -> Self {
        match self {
            Panel::Todo => Panel::Timer,
            Panel::Timer => Panel::Todo,
        }
    }

    /// One step toward Todo, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Panel::Timer => Panel::Todo,
            Panel::Todo => Panel::Timer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Which input layer currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Adding,
    ConfirmPending,
}

pub struct AppState {
    pub active_panel: Panel,
    pub todo: ListEditor<TodoItem>,
    pub timer: ListEditor<TimerItem>,
    pub gate: ConfirmationGate,
    pub viewport: Viewport,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::from_data(AppData::default())
    }

    pub fn from_data(data: AppData) -> Self {
        let (todos, timers) = data.into_items();
        Self {
            active_panel: Panel::Todo,
            todo: ListEditor::from_items(todos),
            timer: ListEditor::from_items(timers),
            gate: ConfirmationGate::new(),
            viewport: Viewport::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn to_data(&self) -> AppData {
        AppData::from_items(self.todo.items(), self.timer.items())
    }

    pub fn mode(&self) -> Mode {
        if self.gate.is_armed() {
            Mode::ConfirmPending
        } else if self.active_is_adding() {
            Mode::Adding
        } else {
            Mode::Normal
        }
    }

    pub fn active_is_adding(&self) -> bool {
        match self.active_panel {
            Panel::Todo => self.todo.is_adding(),
            Panel::Timer => self.timer.is_adding(),
        }
    }

    pub fn switch_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
        self.dirty = true;
    }

    /// Arm the gate for the active panel's selected item, if there is one.
    pub fn request_delete(&mut self) -> bool {
        let panel = self.active_panel;
        let (label, index) = match panel {
            Panel::Todo => (self.todo.selected_label(), self.todo.selected()),
            Panel::Timer => (self.timer.selected_label(), self.timer.selected()),
        };
        let Some(label) = label else {
            return false;
        };
        let message = format!("Delete \"{}\"?", label);
        self.gate.arm(message, DeleteTarget { panel, index })
    }

    pub fn delete(&mut self, target: DeleteTarget) -> Option<String> {
        match target.panel {
            Panel::Todo => self.todo.delete_at(target.index).map(|t| t.title),
            Panel::Timer => self.timer.delete_at(target.index).map(|t| t.name),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
        self.dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
