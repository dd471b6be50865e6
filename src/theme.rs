//! Light/dark preference and where it is kept between runs.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Color scheme of the front-end.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme persistence error.
#[derive(Debug, Clone, Display, Error)]
#[display("Theme error: {} at {}:{}", message, file, line)]
pub struct ThemeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ThemeError {
    /// Creates a new theme error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Somewhere a single theme preference can be read and written.
pub trait ThemeStore {
    /// Returns the saved theme, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Theme>, ThemeError>;

    /// Saves `theme`, replacing any earlier value.
    fn save(&mut self, theme: Theme) -> Result<(), ThemeError>;
}

/// On-disk layout of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Keeps the theme in a small TOML file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        if !self.path.exists() {
            debug!("No saved theme");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ThemeError::new(format!("Failed to read theme file: {}", e)))?;
        let file: ThemeFile = toml::from_str(&content)
            .map_err(|e| ThemeError::new(format!("Failed to parse theme file: {}", e)))?;
        debug!(theme = %file.theme, "Loaded saved theme");
        Ok(Some(file.theme))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let content = toml::to_string(&ThemeFile { theme })
            .map_err(|e| ThemeError::new(format!("Failed to encode theme: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| ThemeError::new(format!("Failed to write theme file: {}", e)))?;
        info!("Theme saved");
        Ok(())
    }
}

/// Keeps the theme in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl MemoryThemeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        Ok(self.theme)
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.theme = Some(theme);
        Ok(())
    }
}

/// Flips the stored theme (starting from the default when none is saved)
/// and returns the new value.
#[instrument(skip(store))]
pub fn toggle_saved_theme(store: &mut impl ThemeStore) -> Result<Theme, ThemeError> {
    let next = store.load()?.unwrap_or_default().toggle();
    store.save(next)?;
    Ok(next)
}
