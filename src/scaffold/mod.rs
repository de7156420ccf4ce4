//! Scaffold Module
//!
//! Per-language starter files for a freshly initialized codebase. Each
//! language writes its templates into the chosen source directory and
//! offers to install dependencies.

pub mod javascript;
pub mod typescript;

#[cfg(feature = "python")]
pub mod python;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::prompt::Prompter;
use crate::types::{FunctionsInstance, Language, Setup, SetupOptions};

/// Run the scaffolding routine for the chosen language.
pub async fn setup_language(
    language: Language,
    setup: &Setup,
    options: &SetupOptions,
    prompter: &dyn Prompter,
) -> Result<()> {
    let instance = setup
        .functions
        .as_ref()
        .context("No codebase selected before scaffolding")?;
    let source_dir = source_dir(options, instance)?;

    match language {
        Language::Javascript => javascript::setup(instance, &source_dir, prompter).await,
        Language::Typescript => typescript::setup(instance, &source_dir, prompter).await,
        #[cfg(feature = "python")]
        Language::Python => python::setup(instance, &source_dir, prompter).await,
    }
}

/// Create (if needed) and return the codebase's source directory.
fn source_dir(options: &SetupOptions, instance: &FunctionsInstance) -> Result<PathBuf> {
    let dir = options.project_dir.join(&instance.source);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create source directory {}", dir.display()))?;
    Ok(dir)
}

/// Write a template file unless the user already has one; existing files
/// are never overwritten during re-initialization.
pub(crate) fn write_if_absent(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    if path.exists() {
        println!("{}", format!("  {} already exists, skipping", name).dimmed());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", format!("  {} written", name).green());
    Ok(())
}

/// Offer to run `npm install` in the source directory. An install
/// failure is reported but does not abort setup.
pub(crate) async fn offer_npm_install(source_dir: &Path, prompter: &dyn Prompter) -> Result<()> {
    if !prompter.confirm("Do you want to install dependencies with npm now?", true)? {
        return Ok(());
    }

    println!("{}", "  Running npm install...".cyan());
    let status = tokio::process::Command::new("npm")
        .arg("install")
        .current_dir(source_dir)
        .status()
        .await;

    match status {
        Ok(status) if status.success() => {
            println!("{}", "  Dependencies installed".green());
        }
        Ok(status) => {
            tracing::warn!(code = status.code(), "npm install failed");
            println!(
                "{}",
                "  npm install failed; run it manually in the source directory.".yellow()
            );
        }
        Err(err) => {
            tracing::warn!(%err, "could not run npm");
            println!(
                "{}",
                "  npm not found; install dependencies manually.".yellow()
            );
        }
    }
    Ok(())
}
