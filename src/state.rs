//! File-backed preference storage
//!
//! The web incarnation of the rail kept its one preference in browser
//! local storage; this adapter plays the same part for hosts with a
//! filesystem. Stored as a flat JSON string map so additional
//! preferences can share the file later.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::PreferenceStore;

const PREFS_FILE: &str = "prefs.json";

/// Persistent key-value preferences backed by a JSON file.
///
/// Read once at construction; every `set` writes through. All IO
/// failures degrade to in-memory behavior, matching the rule that a
/// broken store must never break the rail.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Load preferences from `path`, treating a missing or unreadable
    /// file as empty
    pub fn load(path: &Path) -> Self {
        let values = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    /// Default per-user location: `<config dir>/navrail/prefs.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("navrail").join(PREFS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        // Best-effort write; the preference is cosmetic.
        let _ = self.save();
    }
}
