use crate::app::action::Action;
use crate::app::editor::ListEditor;
use crate::app::event::AppEvent;
use crate::app::gate::GateOutcome;
use crate::app::item::ListItem;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
        AppEvent::AutoSave => vec![Action::Save],
    }
}

/// Ticks reach the timer list no matter which panel or modal is showing.
fn handle_tick(state: &mut AppState) {
    if state.timer.tick() {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(width, height) => {
            state.resize(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// AltGr arrives as Ctrl+Alt on some platforms and still produces text.
fn is_altgr(key: &KeyEvent) -> bool {
    key.modifiers
        .contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL) && !is_altgr(key),
        KeyCode::Char('q') => !is_chord(key),
        _ => false,
    }
}

/// Save first: the loop performs actions in order and stops at `Quit`.
fn quit() -> Vec<Action> {
    vec![Action::Save, Action::Quit]
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match state.mode() {
        Mode::ConfirmPending => {
            handle_gate_key(state, key);
            vec![]
        }
        Mode::Adding => {
            if is_quit(&key) {
                return quit();
            }
            match state.active_panel {
                Panel::Todo => handle_add_key(&mut state.todo, key),
                Panel::Timer => handle_add_key(&mut state.timer, key),
            }
            vec![]
        }
        Mode::Normal => handle_normal_key(state, key),
    }
}

fn handle_gate_key(state: &mut AppState, key: KeyEvent) {
    match state.gate.handle_key(key) {
        GateOutcome::Confirmed(target) => {
            state.delete(target);
        }
        GateOutcome::Cancelled | GateOutcome::Ignored => {}
    }
}

fn handle_add_key<T: ListItem>(editor: &mut ListEditor<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            editor.commit_add();
        }
        KeyCode::Esc => editor.cancel_add(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Char(c) if !is_chord(&key) || is_altgr(&key) => editor.append_char(c),
        _ => {}
    }
}

fn handle_normal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if is_quit(&key) {
        return quit();
    }
    if is_chord(&key) {
        return vec![];
    }

    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            state.switch_panel(state.active_panel.next());
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.switch_panel(state.active_panel.prev());
            vec![]
        }
        KeyCode::Char('d') => {
            state.request_delete();
            vec![]
        }
        _ => {
            match state.active_panel {
                Panel::Todo => handle_list_key(&mut state.todo, key),
                Panel::Timer => {
                    if key.code == KeyCode::Char('r') {
                        state.timer.reset_selected();
                    } else {
                        handle_list_key(&mut state.timer, key);
                    }
                }
            }
            vec![]
        }
    }
}

fn handle_list_key<T: ListItem>(editor: &mut ListEditor<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') => editor.enter_add_mode(),
        KeyCode::Up | KeyCode::Char('k') => editor.navigate_up(),
        KeyCode::Down | KeyCode::Char('j') => editor.navigate_down(),
        KeyCode::Enter | KeyCode::Char(' ') => editor.toggle_selected(),
        _ => {}
    }
}
