mod app;
mod config;
mod logging;
mod storage;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::storage::{AppData, JsonFileStore, Store};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

const TICK_PERIOD: Duration = Duration::from_secs(1);
const AUTOSAVE_PERIOD: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let store = JsonFileStore::new(
        cfg.storage
            .data_file
            .clone()
            .unwrap_or_else(storage::default_data_path),
    );
    tracing::info!(data_file = %store.path().display(), "starting");

    let mut state = AppState::from_data(load_or_default(&store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;
    state.resize(size.width, size.height);

    // Run app
    let result = run_app(&mut terminal, &mut state, &store).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("fatal: {:#}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Periodic event source. Each firing re-arms for the next period; a late
/// firing delays the schedule rather than bursting to catch up.
fn spawn_ticker(tx: mpsc::UnboundedSender<AppEvent>, period: Duration, make: fn() -> AppEvent) {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tx.send(make()).is_err() {
                break;
            }
        }
    });
}

fn load_or_default(store: &impl Store) -> AppData {
    store.load().unwrap_or_else(|e| {
        tracing::warn!("load failed, starting with empty lists: {}", e);
        AppData::default()
    })
}

fn save(store: &impl Store, state: &AppState) {
    match store.save(&state.to_data()) {
        Ok(()) => tracing::debug!("saved"),
        Err(e) => tracing::warn!("save failed: {}", e),
    }
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    store: &impl Store,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("terminal input failed: {}", e);
                    break;
                }
            };
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    spawn_ticker(event_tx.clone(), TICK_PERIOD, || AppEvent::Tick);
    spawn_ticker(event_tx, AUTOSAVE_PERIOD, || AppEvent::AutoSave);

    // Initial render
    terminal.draw(|f| ui::render(f, state))?;
    state.dirty = false;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(state, event);

        for action in actions {
            match action {
                Action::Save => save(store, state),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            tracing::info!("quit");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Backing store whose disk is always gone.
    struct BrokenStore;

    impl Store for BrokenStore {
        fn load(&self) -> Result<AppData, StoreError> {
            Err(StoreError::Read {
                path: PathBuf::from("/gone/data.json"),
                source: io::Error::other("device not configured"),
            })
        }

        fn save(&self, _data: &AppData) -> Result<(), StoreError> {
            Err(StoreError::Write {
                path: PathBuf::from("/gone/data.json"),
                source: io::Error::other("no space left on device"),
            })
        }
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_load_failure_starts_empty() {
        assert_eq!(load_or_default(&BrokenStore), AppData::default());

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{\"todos\": [").unwrap();
        let state = AppState::from_data(load_or_default(&JsonFileStore::new(&path)));
        assert!(state.todo.items().is_empty());
        assert!(state.timer.items().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_session_running() {
        let mut state = AppState::new();
        handler::handle_event(&mut state, key(KeyCode::Char('n')));
        for c in "Eat".chars() {
            handler::handle_event(&mut state, key(KeyCode::Char(c)));
        }
        handler::handle_event(&mut state, key(KeyCode::Enter));

        for action in handler::handle_event(&mut state, AppEvent::AutoSave) {
            assert_eq!(action, Action::Save);
            save(&BrokenStore, &state);
        }
        assert!(!state.should_quit);

        handler::handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(state.todo.items()[0].completed);
        assert_eq!(
            handler::handle_event(&mut state, key(KeyCode::Char('q'))),
            vec![Action::Save, Action::Quit]
        );
    }
}
