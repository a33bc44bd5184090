//! Persistence of the todo and timer lists as a single JSON document.

pub mod model;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use model::AppData;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode app data: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Loads and saves the app's list contents.
pub trait Store {
    /// A missing backing file is not an error: it yields empty lists.
    fn load(&self) -> Result<AppData, StoreError>;
    fn save(&self, data: &AppData) -> Result<(), StoreError>;
}

pub fn default_data_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("productivity-tui")
        .join("data.json")
}

/// Pretty-printed JSON file, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<AppData, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppData::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, data: &AppData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }
        let mut contents = serde_json::to_string_pretty(data).map_err(StoreError::Encode)?;
        contents.push('\n');

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| self.write_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.write_err(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::model::{TimerRecord, TodoRecord};
    use crate::app::state::AppState;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        assert_eq!(store.load().unwrap(), AppData::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");
        let store = JsonFileStore::new(&path);
        store.save(&AppData::default()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_round_trip_through_state() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        let data = AppData {
            todos: vec![TodoRecord {
                title: "Eat".into(),
                completed: true,
            }],
            timers: vec![TimerRecord {
                name: "Run".into(),
                elapsed_seconds: 125.0,
                running: false,
            }],
        };
        let mut state = AppState::from_data(data.clone());
        state.timer.toggle_selected();
        assert!(state.timer.items()[0].running);

        store.save(&state.to_data()).unwrap();
        let loaded = AppState::from_data(store.load().unwrap());

        assert_eq!(loaded.todo.items(), state.todo.items());
        assert_eq!(loaded.timer.items()[0].name, "Run");
        assert_eq!(loaded.timer.items()[0].elapsed, Duration::from_secs(125));
        assert!(!loaded.timer.items()[0].running);
        assert_eq!(loaded.to_data(), data);
    }

    #[test]
    fn test_load_forces_running_false() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{"todos":[],"timers":[{"name":"Run","elapsed_seconds":125.0,"running":true}]}"#,
        )
        .unwrap();
        let state = AppState::from_data(JsonFileStore::new(&path).load().unwrap());
        assert!(!state.timer.items()[0].running);
        assert_eq!(state.timer.items()[0].elapsed, Duration::from_secs(125));
    }

    #[test]
    fn test_saved_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut state = AppState::new();
        state.timer.enter_add_mode();
        state.timer.append_char('R');
        state.timer.commit_add();
        state.timer.toggle_selected();
        state.timer.tick();
        state.timer.tick();

        JsonFileStore::new(&path).save(&state.to_data()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["todos"], serde_json::json!([]));
        assert_eq!(value["timers"][0]["name"], "R");
        assert_eq!(value["timers"][0]["elapsed_seconds"], 2.0);
        assert_eq!(value["timers"][0]["running"], false);
    }
}
