//! Firefn - Type Definitions
//!
//! Shared types for the functions setup flow: the in-memory setup state,
//! the parsed project configuration, and the language choice.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ─── Project configuration ───────────────────────────────────────

/// One codebase entry inside the `functions` block of `firebase.json`.
///
/// Both `source` and `codebase` are unique across the list; the flow
/// enforces that on every append.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionsConfig {
    /// Directory holding the codebase's sources, relative to the project root.
    pub source: String,
    /// Codebase identifier. Lowercase letters, digits, `-` and `_`, max 63 chars.
    pub codebase: String,
    /// Glob-like patterns excluded when packaging the codebase for deploy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
}

/// The parsed project configuration file.
///
/// Only the `functions` block is modeled; every other top-level key is
/// carried through `rest` untouched so a save never loses unrelated
/// configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FirebaseConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionsConfig>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_json::Value>,
}

impl FirebaseConfig {
    /// Look up a codebase entry by its identifier.
    pub fn find_codebase(&self, codebase: &str) -> Option<&FunctionsConfig> {
        self.functions.iter().find(|c| c.codebase == codebase)
    }

    /// Mutable variant of [`find_codebase`](Self::find_codebase).
    pub fn find_codebase_mut(&mut self, codebase: &str) -> Option<&mut FunctionsConfig> {
        self.functions.iter_mut().find(|c| c.codebase == codebase)
    }
}

// ─── Setup state ─────────────────────────────────────────────────

/// The codebase currently being initialized, recorded on the setup state
/// once the prompts succeed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionsInstance {
    pub source: String,
    pub codebase: String,
}

/// Mutable state threaded through the whole setup flow.
///
/// Owned by the caller; the flow fills in `functions` and appends to the
/// configuration it is handed. Nothing here is persisted by the flow
/// itself.
#[derive(Clone, Debug, Default)]
pub struct Setup {
    pub functions: Option<FunctionsInstance>,
}

/// Options resolved by the CLI before the flow starts.
#[derive(Clone, Debug)]
pub struct SetupOptions {
    /// Project root; scaffolding writes below this directory.
    pub project_dir: PathBuf,
    /// Default cloud project id, when one is configured. Cloud permission
    /// and API-enablement steps are skipped without it.
    pub project_id: Option<String>,
}

// ─── Languages ───────────────────────────────────────────────────

/// Implementation language for a functions codebase.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    #[cfg(feature = "python")]
    Python,
}

impl Language {
    /// Languages offered by the selector, in prompt order.
    pub fn all() -> &'static [Language] {
        &[
            Language::Javascript,
            Language::Typescript,
            #[cfg(feature = "python")]
            Language::Python,
        ]
    }

    /// Human-readable label used in the select prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Typescript => "TypeScript",
            #[cfg(feature = "python")]
            Language::Python => "Python",
        }
    }
}
