//! Persists the input journal of the last finished session.

use directories::ProjectDirs;
use maze_core::InputJournal;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const JOURNAL_FILE_NAME: &str = "last_session.json";

pub fn default_journal_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|proj_dirs| proj_dirs.data_dir().join(JOURNAL_FILE_NAME))
}

pub fn write_journal_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

pub fn load_journal(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
