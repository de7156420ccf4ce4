//! Codebase Selection
//!
//! Prompts for the source directory and codebase name of a new codebase,
//! or picks an existing codebase to reconfigure. Uniqueness of both the
//! source path and the name is enforced against the current config on
//! every attempt.

use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;

use crate::error::SetupError;
use crate::prompt::{retry_input, Prompter};
use crate::types::{FirebaseConfig, FunctionsConfig, FunctionsInstance, Setup};

/// Source directory offered when the user just presses Enter.
pub const DEFAULT_SOURCE: &str = "functions";

// ─── Validation ──────────────────────────────────────────────────

/// Validate a codebase identifier: lowercase letters, digits, `-` and
/// `_`, at most 63 characters.
pub fn validate_codebase_name(name: &str) -> Result<(), SetupError> {
    let re = Regex::new(r"^[a-z0-9_-]{1,63}$").expect("static regex");
    if re.is_match(name) {
        Ok(())
    } else {
        Err(SetupError::invalid(
            "Invalid codebase name. Use up to 63 lowercase letters, digits, hyphens or underscores.",
        ))
    }
}

fn assert_unique_source(source: &str, entries: &[FunctionsConfig]) -> Result<(), SetupError> {
    match entries.iter().find(|e| e.source == source) {
        Some(existing) => Err(SetupError::invalid(format!(
            "Source directory {} is already in use by codebase {}.",
            source, existing.codebase
        ))),
        None => Ok(()),
    }
}

fn assert_unique_codebase(name: &str, entries: &[FunctionsConfig]) -> Result<(), SetupError> {
    if entries.iter().any(|e| e.codebase == name) {
        Err(SetupError::invalid(format!(
            "Codebase {} already exists.",
            name
        )))
    } else {
        Ok(())
    }
}

/// Derive a codebase name suggestion from the chosen source path: the
/// last path component, lowercased, with anything outside the allowed
/// alphabet collapsed to a hyphen.
pub fn suggest_codebase_name(source: &str) -> String {
    let base = source
        .split(['/', '\\'])
        .rev()
        .find(|s| !s.is_empty())
        .unwrap_or("");

    let mut name = String::new();
    let mut last_was_dash = false;
    for ch in base.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            name.push(ch);
            last_was_dash = false;
        } else if !last_was_dash && !name.is_empty() {
            name.push('-');
            last_was_dash = true;
        }
    }
    while name.ends_with('-') {
        name.pop();
    }
    name.truncate(63);

    if name.is_empty() {
        "default".to_string()
    } else {
        name
    }
}

// ─── New codebase ────────────────────────────────────────────────

/// Prompt for a new codebase's source directory and name, append the
/// entry to the config, and record the choice on the setup state.
///
/// Either prompt gets five attempts; a sixth validation failure aborts
/// the whole flow with nothing recorded.
pub fn init_new_codebase(
    setup: &mut Setup,
    config: &mut FirebaseConfig,
    prompter: &dyn Prompter,
) -> Result<()> {
    let entries = config.functions.clone();

    let source = retry_input(
        prompter,
        "In what directory would you like to initialize your functions?",
        Some(DEFAULT_SOURCE),
        |answer| {
            let answer = answer.trim_end_matches('/');
            if answer.is_empty() {
                return Err(SetupError::invalid("A source directory is required."));
            }
            assert_unique_source(answer, &entries)?;
            Ok(answer.to_string())
        },
    )?;

    let suggestion = suggest_codebase_name(&source);
    let codebase = retry_input(
        prompter,
        "What should be the name of this codebase?",
        Some(&suggestion),
        |answer| {
            validate_codebase_name(answer)?;
            assert_unique_codebase(answer, &entries)?;
            Ok(answer.to_string())
        },
    )?;

    config.functions.push(FunctionsConfig {
        source: source.clone(),
        codebase: codebase.clone(),
        ignore: None,
    });
    setup.functions = Some(FunctionsInstance { source, codebase });

    Ok(())
}

// ─── Re-initialize ───────────────────────────────────────────────

/// Pick an existing codebase to reconfigure. With a single entry the
/// prompt is skipped; the entry's source and name are reused verbatim.
pub fn select_reinit_codebase(
    setup: &mut Setup,
    config: &FirebaseConfig,
    prompter: &dyn Prompter,
) -> Result<()> {
    let entry = if config.functions.len() > 1 {
        let names: Vec<&str> = config.functions.iter().map(|e| e.codebase.as_str()).collect();
        let index = prompter.select("Which codebase would you like to re-initialize?", &names, 0)?;
        &config.functions[index]
    } else {
        config
            .functions
            .first()
            .context("No existing codebase to re-initialize")?
    };

    println!(
        "{}",
        format!("  Re-initializing codebase {}...", entry.codebase).cyan()
    );
    setup.functions = Some(FunctionsInstance {
        source: entry.source.clone(),
        codebase: entry.codebase.clone(),
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::prompt::scripted::ScriptedPrompter;

    fn config_with(entries: &[(&str, &str)]) -> FirebaseConfig {
        FirebaseConfig {
            functions: entries
                .iter()
                .map(|(source, codebase)| FunctionsConfig {
                    source: source.to_string(),
                    codebase: codebase.to_string(),
                    ignore: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_first_unused_source() {
        let mut config = config_with(&[("functions", "default")]);
        let mut setup = Setup::default();
        // First answer collides with the existing entry, second is free.
        let prompter = ScriptedPrompter::new().with_inputs(&["functions", "fns-v2", "api"]);

        init_new_codebase(&mut setup, &mut config, &prompter).unwrap();

        let instance = setup.functions.unwrap();
        assert_eq!(instance.source, "fns-v2");
        assert_eq!(instance.codebase, "api");
        assert_eq!(config.functions.len(), 2);
        assert_eq!(config.functions[1].source, "fns-v2");
    }

    #[test]
    fn test_codebase_name_needs_format_and_uniqueness() {
        let mut config = config_with(&[("functions", "default")]);
        let mut setup = Setup::default();
        // "Bad Name" fails format, "default" fails uniqueness, "api" passes both.
        let prompter =
            ScriptedPrompter::new().with_inputs(&["fns", "Bad Name", "default", "api"]);

        init_new_codebase(&mut setup, &mut config, &prompter).unwrap();

        assert_eq!(setup.functions.unwrap().codebase, "api");
    }

    #[test]
    fn test_five_duplicate_sources_abort_the_flow() {
        let mut config = config_with(&[("functions", "default")]);
        let mut setup = Setup::default();
        let prompter = ScriptedPrompter::new().with_inputs(&[
            "functions",
            "functions",
            "functions",
            "functions",
            "functions",
            "never-read",
        ]);

        let err = init_new_codebase(&mut setup, &mut config, &prompter).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::RetriesExhausted(5))
        ));
        // Nothing recorded, no further prompting past the budget.
        assert!(setup.functions.is_none());
        assert_eq!(config.functions.len(), 1);
        assert_eq!(prompter.prompts_issued(), 5);
    }

    #[test]
    fn test_defaults_flow_through_empty_answers() {
        let mut config = FirebaseConfig::default();
        let mut setup = Setup::default();
        // Enter twice: default source, then the suggested name.
        let prompter = ScriptedPrompter::new().with_inputs(&["", ""]);

        init_new_codebase(&mut setup, &mut config, &prompter).unwrap();

        let instance = setup.functions.unwrap();
        assert_eq!(instance.source, DEFAULT_SOURCE);
        assert_eq!(instance.codebase, "functions");
    }

    #[test]
    fn test_suggest_codebase_name() {
        assert_eq!(suggest_codebase_name("functions"), "functions");
        assert_eq!(suggest_codebase_name("packages/My Functions"), "my-functions");
        assert_eq!(suggest_codebase_name("services/api/"), "api");
        assert_eq!(suggest_codebase_name("///"), "default");
    }

    #[test]
    fn test_validate_codebase_name() {
        assert!(validate_codebase_name("api-v2_prod").is_ok());
        assert!(validate_codebase_name("").is_err());
        assert!(validate_codebase_name("Has Caps").is_err());
        assert!(validate_codebase_name(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_reinit_single_entry_skips_prompt() {
        let config = config_with(&[("functions", "default")]);
        let mut setup = Setup::default();
        // Empty script: any prompt would fail the test.
        let prompter = ScriptedPrompter::new();

        select_reinit_codebase(&mut setup, &config, &prompter).unwrap();

        let instance = setup.functions.unwrap();
        assert_eq!(instance.source, "functions");
        assert_eq!(instance.codebase, "default");
        assert_eq!(prompter.prompts_issued(), 0);
    }

    #[test]
    fn test_reinit_multiple_entries_prompts_by_name() {
        let config = config_with(&[("functions", "default"), ("fns-v2", "api")]);
        let mut setup = Setup::default();
        let prompter = ScriptedPrompter::new().with_selections(&[1]);

        select_reinit_codebase(&mut setup, &config, &prompter).unwrap();

        let instance = setup.functions.unwrap();
        assert_eq!(instance.codebase, "api");
        assert_eq!(instance.source, "fns-v2");
    }
}
