//! Persisted user preferences.
//!
//! The only persisted value is the theme: read once at startup, written on
//! every toggle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

/// Errors from reading or writing preferences
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to read preference '{key}': {source}")]
    Read { key: String, source: io::Error },

    #[error("Failed to write preference '{key}': {source}")]
    Write { key: String, source: io::Error },
}

/// Minimal key-value storage.
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// In-memory store, for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PreferenceError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let write_err = |source| PreferenceError::Write {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.directory).map_err(write_err)?;
        fs::write(self.path_for(key), value).map_err(write_err)
    }
}

/// Colour theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Reads and writes the theme preference through a [`PreferenceStore`].
///
/// # Example
///
/// ```rust
/// use lambdacalc::preferences::{MemoryStore, Theme, ThemeStore};
///
/// let themes = ThemeStore::new(MemoryStore::new());
/// assert_eq!(themes.load().unwrap(), Theme::Light);
/// assert_eq!(themes.toggle().unwrap(), Theme::Dark);
/// assert_eq!(themes.load().unwrap(), Theme::Dark);
/// ```
#[derive(Debug)]
pub struct ThemeStore<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub const KEY: &'static str = "theme";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The saved theme; light when nothing usable is stored.
    pub fn load(&self) -> Result<Theme, PreferenceError> {
        let saved = self.store.get(Self::KEY)?;
        Ok(saved
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or_default())
    }

    pub fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        self.store.set(Self::KEY, theme.name())
    }

    /// Flip the saved theme and return the new one.
    pub fn toggle(&self) -> Result<Theme, PreferenceError> {
        let theme = self.load()?.toggled();
        self.save(theme)?;
        debug!(theme = theme.name(), "theme toggled");
        Ok(theme)
    }
}
