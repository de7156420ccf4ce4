//! Language Selection
//!
//! Asks which language the codebase will be written in, stamps the
//! language's ignore patterns onto the active codebase entry, and hands
//! off to the per-language scaffolding.

use anyhow::{Context, Result};

use crate::prompt::Prompter;
use crate::scaffold;
use crate::types::{FirebaseConfig, Language, Setup, SetupOptions};

/// Deploy-packaging exclusions for Node-based codebases.
const NODE_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "firebase-debug.log",
    "firebase-debug.*.log",
];

/// Deploy-packaging exclusions for Python codebases.
#[cfg(feature = "python")]
const PYTHON_IGNORES: &[&str] = &[
    "venv",
    ".git",
    "firebase-debug.log",
    "firebase-debug.*.log",
    "__pycache__",
];

/// The fixed ignore list assigned for `language`.
pub fn ignores_for(language: Language) -> Vec<String> {
    let patterns: &[&str] = match language {
        Language::Javascript | Language::Typescript => NODE_IGNORES,
        #[cfg(feature = "python")]
        Language::Python => PYTHON_IGNORES,
    };
    patterns.iter().map(|p| p.to_string()).collect()
}

/// Prompt for the implementation language, update the active entry's
/// ignore list, and run the language's scaffolding.
pub async fn choose_language(
    setup: &mut Setup,
    config: &mut FirebaseConfig,
    options: &SetupOptions,
    prompter: &dyn Prompter,
) -> Result<()> {
    let languages = Language::all();
    let labels: Vec<&str> = languages.iter().map(|l| l.label()).collect();
    let index = prompter.select(
        "What language would you like to use to write your functions?",
        &labels,
        0,
    )?;
    let language = languages[index];

    let instance = setup
        .functions
        .clone()
        .context("No codebase selected before language choice")?;
    let entry = config
        .find_codebase_mut(&instance.codebase)
        .with_context(|| format!("Codebase {} missing from config", instance.codebase))?;
    entry.ignore = Some(ignores_for(language));

    tracing::debug!(codebase = %instance.codebase, language = language.label(), "scaffolding");
    scaffold::setup_language(language, setup, options, prompter).await
}
