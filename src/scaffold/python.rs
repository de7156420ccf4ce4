//! Python Scaffold
//!
//! Starter files for a Python functions codebase. Gated behind the
//! `python` cargo feature.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::prompt::Prompter;
use crate::types::FunctionsInstance;

use super::write_if_absent;

const MAIN_PY: &str = r#"# Welcome to Cloud Functions for Firebase for Python!
# Deploy with `firebase deploy`

# from firebase_functions import https_fn
# from firebase_admin import initialize_app

# initialize_app()

# @https_fn.on_request()
# def on_request_example(req: https_fn.Request) -> https_fn.Response:
#     return https_fn.Response("Hello world!")
"#;

const REQUIREMENTS_TXT: &str = "firebase_functions~=0.1.0\n";

const GITIGNORE: &str = "venv/\n__pycache__/\n*.local\n";

/// Write the Python starter files and offer to create a virtualenv.
pub async fn setup(
    instance: &FunctionsInstance,
    source_dir: &Path,
    prompter: &dyn Prompter,
) -> Result<()> {
    println!(
        "{}",
        format!(
            "  Initializing Python codebase {} in {}/\n",
            instance.codebase, instance.source
        )
        .cyan()
    );

    write_if_absent(source_dir, "main.py", MAIN_PY)?;
    write_if_absent(source_dir, "requirements.txt", REQUIREMENTS_TXT)?;
    write_if_absent(source_dir, ".gitignore", GITIGNORE)?;

    if prompter.confirm("Do you want to create a virtualenv now?", true)? {
        println!("{}", "  Creating venv...".cyan());
        let status = tokio::process::Command::new("python3")
            .args(["-m", "venv", "venv"])
            .current_dir(source_dir)
            .status()
            .await;

        match status {
            Ok(status) if status.success() => {
                println!("{}", "  venv created".green());
            }
            _ => {
                tracing::warn!("venv creation failed");
                println!(
                    "{}",
                    "  Could not create a venv; create one manually before deploying.".yellow()
                );
            }
        }
    }
    Ok(())
}
