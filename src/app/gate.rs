use crate::app::state::Panel;
use crossterm::event::{KeyCode, KeyEvent};

/// The item a confirmed delete will remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTarget {
    pub panel: Panel,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub message: String,
    pub target: DeleteTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Confirmed(DeleteTarget),
    Cancelled,
    /// Key swallowed while armed.
    Ignored,
}

/// Yes/no prompt guarding destructive actions. While armed it owns the
/// keyboard.
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingConfirm>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.message.as_str())
    }

    /// Returns `false` (and changes nothing) if already armed.
    pub fn arm(&mut self, message: String, target: DeleteTarget) -> bool {
        if self.is_armed() {
            return false;
        }
        self.pending = Some(PendingConfirm { message, target });
        true
    }

    pub fn resolve_confirm(&mut self) -> Option<DeleteTarget> {
        self.pending.take().map(|p| p.target)
    }

    pub fn resolve_cancel(&mut self) {
        self.pending = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> GateOutcome {
        if !self.is_armed() {
            return GateOutcome::Ignored;
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self
                .resolve_confirm()
                .map_or(GateOutcome::Ignored, GateOutcome::Confirmed),
            KeyCode::Char('n') | KeyCode::Esc => {
                self.resolve_cancel();
                GateOutcome::Cancelled
            }
            _ => GateOutcome::Ignored,
        }
    }
}
