//! Session persistence
//!
//! Holds the single authenticated identity across navigations, plus the
//! display preferences. JSON files under a base directory; loading fails
//! soft (absent) on missing or malformed data. Single logical writer,
//! last writer wins; no network side effects.

use serde::{Deserialize, Serialize};
use shared::models::Employee;
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session.json";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<f32>,
}

/// Persisted session state
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a session store rooted at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn preferences_path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    /// Load the active identity. Missing file, unreadable file and
    /// malformed JSON all read as "no session".
    pub fn load(&self) -> Option<Employee> {
        let json = fs::read_to_string(self.session_path()).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Persist the identity, replacing any prior one. At most one
    /// identity is ever resident.
    pub fn save(&self, identity: &Employee) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(identity)?;
        fs::write(self.session_path(), json)?;
        tracing::debug!(employee_id = identity.id, "session saved");
        Ok(())
    }

    /// Remove the persisted identity (logout)
    pub fn clear(&self) -> std::io::Result<()> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("session cleared");
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }

    /// Load the numeric font-size preference, fail-soft.
    pub fn load_font_size(&self) -> Option<f32> {
        let json = fs::read_to_string(self.preferences_path()).ok()?;
        serde_json::from_str::<Preferences>(&json).ok()?.font_size
    }

    /// Persist the font-size preference.
    pub fn save_font_size(&self, font_size: f32) -> std::io::Result<()> {
        self.ensure_dir()?;
        let preferences = Preferences {
            font_size: Some(font_size),
        };
        let json = serde_json::to_string_pretty(&preferences)?;
        fs::write(self.preferences_path(), json)
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}
