use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::ActionStore;
use crate::error::{GreenlogError, Result};
use crate::model::Action;

/// Flat-file JSON store.
///
/// The whole collection lives in a single file, pretty-printed (formatting
/// is cosmetic, not contractual). Reads treat a missing, unreadable, or
/// corrupted file as an empty collection; writes replace the file atomically
/// (temp file in the same directory, then rename).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(GreenlogError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        let tmp_name = format!(".actions-{nanos}.tmp");
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(tmp_name),
            _ => PathBuf::from(tmp_name),
        }
    }
}

impl ActionStore for FileStore {
    fn load(&self) -> Result<Vec<Action>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // Unreadable is treated the same as absent.
            Err(_) => return Ok(Vec::new()),
        };
        // Corruption degrades to an empty collection.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&self, actions: &[Action]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content =
            serde_json::to_string_pretty(actions).map_err(GreenlogError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(GreenlogError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(GreenlogError::Io)?;

        Ok(())
    }
}
