//! Project Configuration
//!
//! Loads and saves `firebase.json` in the project directory and resolves
//! the default project id from `.firebaserc`. The setup flow itself never
//! touches disk; main loads before and saves after.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::FirebaseConfig;

/// Config file name within the project directory.
pub const CONFIG_FILENAME: &str = "firebase.json";

/// Per-project rc file holding project aliases.
pub const RC_FILENAME: &str = ".firebaserc";

/// Returns the full path to the project config file.
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILENAME)
}

/// Load the project config from `<project_dir>/firebase.json`.
///
/// A missing file yields an empty config; a file that exists but cannot
/// be parsed is an error (silently dropping a user's config on the next
/// save would be worse than aborting).
pub fn load_config(project_dir: &Path) -> Result<FirebaseConfig> {
    let path = config_path(project_dir);
    if !path.exists() {
        return Ok(FirebaseConfig::default());
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Save the project config to `<project_dir>/firebase.json`.
pub fn save_config(project_dir: &Path, config: &FirebaseConfig) -> Result<()> {
    let path = config_path(project_dir);
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// ─── Project rc ──────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProjectRc {
    #[serde(default)]
    projects: HashMap<String, String>,
}

/// Resolve the default cloud project id from `.firebaserc`, if the file
/// exists and carries a `default` alias.
pub fn default_project_id(project_dir: &Path) -> Option<String> {
    let path = project_dir.join(RC_FILENAME);
    let contents = fs::read_to_string(path).ok()?;
    let rc: ProjectRc = serde_json::from_str(&contents).ok()?;
    rc.projects.get("default").cloned()
}
