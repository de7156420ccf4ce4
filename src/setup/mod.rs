//! Setup Module
//!
//! The interactive functions setup flow: cloud preflight, the
//! initialize / re-initialize choice, codebase prompts, and language
//! selection.

pub mod codebase;
pub mod language;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::gcp::{CloudApi, FUNCTIONS_API, REQUIRED_PERMISSIONS, RUNTIME_CONFIG_API};
use crate::prompt::Prompter;
use crate::types::{FirebaseConfig, Setup, SetupOptions};

/// Run the functions setup flow.
///
/// With a default project id configured, the caller's permissions are
/// checked and both backing APIs are enabled (concurrently) before any
/// prompt; failure there aborts the flow. The flow then either appends a
/// new codebase entry or re-selects an existing one, and finishes with
/// language selection and scaffolding. `setup` and `config` are mutated
/// in place; persistence stays with the caller.
pub async fn setup_functions(
    setup: &mut Setup,
    config: &mut FirebaseConfig,
    options: &SetupOptions,
    prompter: &dyn Prompter,
    cloud: &dyn CloudApi,
) -> Result<()> {
    println!();
    println!(
        "{}",
        "  Let's set up a functions codebase for your project.\n".white()
    );

    if let Some(project_id) = &options.project_id {
        cloud
            .check_permissions(project_id, REQUIRED_PERMISSIONS)
            .await
            .with_context(|| format!("Permission check failed for project {}", project_id))?;

        // Both APIs must be live before deploys can work; enable them
        // together and fail the whole flow if either enable fails.
        tokio::try_join!(
            cloud.enable_api(project_id, FUNCTIONS_API, false),
            cloud.enable_api(project_id, RUNTIME_CONFIG_API, false),
        )?;
    }

    if config.functions.is_empty() {
        codebase::init_new_codebase(setup, config, prompter)?;
    } else {
        let choice = prompter.select(
            "Would you like to initialize a new codebase, or re-initialize an existing one?",
            &["Initialize", "Re-initialize"],
            0,
        )?;
        if choice == 0 {
            codebase::init_new_codebase(setup, config, prompter)?;
        } else {
            codebase::select_reinit_codebase(setup, config, prompter)?;
        }
    }

    language::choose_language(setup, config, options, prompter).await
}
