//! Optional TOML settings file for the desktop app.
//!
//! Per-player win messages live only in this file; the built-in table is empty
//! and every other name gets the generic congratulation.
//!
//! ```toml
//! player_name = "Ada"
//! cell_size = 24.0
//!
//! [maze]
//! rows = 15
//! cols = 25
//! time_limit_secs = 45
//!
//! [win_messages]
//! Ada = "Nicely done, Ada!"
//! ```

use directories::ProjectDirs;
use maze_core::{MazeConfig, MazeError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::APP_NAME;

/// Side length of one maze cell in logical pixels.
pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read {}: {error}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("invalid TOML in {}: {error}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        error: toml::de::Error,
    },
    #[error("invalid [maze] settings: {0}")]
    InvalidMaze(#[from] MazeError),
    #[error("cell_size must be a positive number, got {0}")]
    InvalidCellSize(f32),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub player_name: Option<String>,
    pub cell_size: f32,
    pub maze: MazeConfig,
    /// Per-player win messages keyed by display name.
    pub win_messages: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            cell_size: DEFAULT_CELL_SIZE,
            maze: MazeConfig::default(),
            win_messages: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigFileError> {
        let config: Self = toml::from_str(content)
            .map_err(|error| ConfigFileError::Parse { path: path.to_path_buf(), error })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let content = fs::read_to_string(path)
            .map_err(|error| ConfigFileError::Io { path: path.to_path_buf(), error })?;
        Self::parse(&content, path)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigFileError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(ConfigFileError::Io { path: path.to_path_buf(), error }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigFileError::InvalidCellSize(self.cell_size));
        }
        self.maze.validate()?;
        Ok(())
    }

    pub fn win_message_for(&self, player_name: &str) -> Option<&str> {
        self.win_messages.get(player_name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Cell;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn win_messages_come_only_from_the_file() {
        let config = AppConfig::default();
        assert!(config.win_messages.is_empty());
        assert_eq!(config.win_message_for("Joe"), None);
    }

    #[test]
    fn missing_file_is_an_error_for_plain_load() {
        let dir = tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Io { .. }), "{err}");
    }

    #[test]
    fn partial_file_fills_remaining_fields_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            concat!(
                "player_name = \"Ada\"\n\n",
                "[maze]\nrows = 9\ncols = 11\n\n",
                "[win_messages]\nAda = \"Well run, Ada!\"\n",
            ),
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.player_name.as_deref(), Some("Ada"));
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(config.maze.rows, 9);
        assert_eq!(config.maze.cols, 11);
        assert_eq!(config.maze.start, Cell::ORIGIN);
        assert_eq!(config.maze.time_limit_secs, MazeConfig::default().time_limit_secs);
        assert_eq!(config.win_message_for("Ada"), Some("Well run, Ada!"));
        assert_eq!(config.win_message_for("Bob"), None);
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = AppConfig::parse("[maze\nrows = 3", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }), "{err}");
        assert!(err.to_string().contains("broken.toml"), "{err}");
    }

    #[test]
    fn invalid_maze_settings_are_rejected() {
        let err = AppConfig::parse("[maze]\nrows = 0\n", Path::new("c.toml")).unwrap_err();
        assert!(
            matches!(err, ConfigFileError::InvalidMaze(MazeError::InvalidDimensions { .. })),
            "{err}"
        );

        let err =
            AppConfig::parse("[maze]\ntime_limit_secs = 0\n", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidMaze(MazeError::InvalidTimeLimit)), "{err}");
    }

    #[test]
    fn non_positive_cell_size_is_rejected() {
        let err = AppConfig::parse("cell_size = 0.0\n", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidCellSize(_)), "{err}");
    }
}
