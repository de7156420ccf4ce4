//! Prompts
//!
//! Interactive terminal prompts for the setup flow, behind a small trait
//! so flows can be driven by a scripted prompter in tests. The terminal
//! implementation uses the `dialoguer` crate.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::error::{SetupError, MAX_PROMPT_RETRIES};

/// Line-oriented prompt primitive. `input` and `select` mirror the two
/// prompt kinds the flow needs; `confirm` is used by scaffolding.
pub trait Prompter {
    /// Free-form text input with an optional default.
    fn input(&self, message: &str, default: Option<&str>) -> Result<String>;

    /// Pick one item from a fixed list; returns the chosen index.
    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Re-issue `message` until `validate` accepts the answer, up to
/// [`MAX_PROMPT_RETRIES`] attempts. Validation failures are reported to
/// the user and recovered; exhausting the budget is fatal.
pub fn retry_input<T, F>(
    prompter: &dyn Prompter,
    message: &str,
    default: Option<&str>,
    mut validate: F,
) -> Result<T>
where
    F: FnMut(&str) -> Result<T, SetupError>,
{
    for _ in 0..MAX_PROMPT_RETRIES {
        let answer = prompter.input(message, default)?;
        match validate(answer.trim()) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_recoverable() => {
                tracing::debug!(%err, "prompt validation failed");
                println!("{}", format!("  {}", err).yellow());
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(SetupError::RetriesExhausted(MAX_PROMPT_RETRIES).into())
}

// ─── Terminal implementation ─────────────────────────────────────

/// Prompter backed by the interactive terminal.
#[derive(Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, message: &str, default: Option<&str>) -> Result<String> {
        let mut prompt = Input::<String>::new()
            .with_prompt(format!("  {} {}", "\u{2192}".cyan(), message.white()))
            .allow_empty(false);
        if let Some(d) = default {
            prompt = prompt.default(d.to_string());
        }
        Ok(prompt.interact_text()?)
    }

    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize> {
        let index = Select::new()
            .with_prompt(format!("  {} {}", "\u{2192}".cyan(), message.white()))
            .items(items)
            .default(default)
            .interact()?;
        Ok(index)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(format!("  {} {}", "\u{2192}".cyan(), message.white()))
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

// ─── Scripted implementation (tests) ─────────────────────────────

#[cfg(test)]
pub mod scripted {
    use std::sync::Mutex;

    use anyhow::{bail, Result};

    use super::Prompter;

    /// Prompter that replays pre-seeded answers. Any prompt issued past
    /// the end of its script is an error, which lets tests assert that a
    /// given prompt was never shown.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        inputs: Mutex<Vec<String>>,
        selections: Mutex<Vec<usize>>,
        confirms: Mutex<Vec<bool>>,
        issued: Mutex<usize>,
    }

    impl ScriptedPrompter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_inputs(self, inputs: &[&str]) -> Self {
            *self.inputs.lock().unwrap() = inputs.iter().rev().map(|s| s.to_string()).collect();
            self
        }

        pub fn with_selections(self, selections: &[usize]) -> Self {
            *self.selections.lock().unwrap() = selections.iter().rev().copied().collect();
            self
        }

        pub fn with_confirms(self, confirms: &[bool]) -> Self {
            *self.confirms.lock().unwrap() = confirms.iter().rev().copied().collect();
            self
        }

        /// Total prompts of any kind issued so far.
        pub fn prompts_issued(&self) -> usize {
            *self.issued.lock().unwrap()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&self, message: &str, default: Option<&str>) -> Result<String> {
            *self.issued.lock().unwrap() += 1;
            match self.inputs.lock().unwrap().pop() {
                // Empty scripted answer means "accept the default".
                Some(answer) if answer.is_empty() => {
                    Ok(default.unwrap_or_default().to_string())
                }
                Some(answer) => Ok(answer),
                None => bail!("unexpected input prompt: {message}"),
            }
        }

        fn select(&self, message: &str, items: &[&str], _default: usize) -> Result<usize> {
            *self.issued.lock().unwrap() += 1;
            match self.selections.lock().unwrap().pop() {
                Some(index) if index < items.len() => Ok(index),
                Some(index) => bail!("selection {index} out of range for: {message}"),
                None => bail!("unexpected select prompt: {message}"),
            }
        }

        fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
            *self.issued.lock().unwrap() += 1;
            match self.confirms.lock().unwrap().pop() {
                Some(answer) => Ok(answer),
                None => bail!("unexpected confirm prompt: {message}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedPrompter;
    use super::*;

    #[test]
    fn test_retry_input_accepts_first_valid_answer() {
        let prompter = ScriptedPrompter::new().with_inputs(&["functions"]);
        let value: String = retry_input(&prompter, "source dir", None, |v| Ok(v.to_string()))
            .unwrap();
        assert_eq!(value, "functions");
        assert_eq!(prompter.prompts_issued(), 1);
    }

    #[test]
    fn test_retry_input_reprompts_on_validation_error() {
        let prompter = ScriptedPrompter::new().with_inputs(&["bad", "bad", "good"]);
        let value: String = retry_input(&prompter, "name", None, |v| {
            if v == "good" {
                Ok(v.to_string())
            } else {
                Err(SetupError::invalid("taken"))
            }
        })
        .unwrap();
        assert_eq!(value, "good");
        assert_eq!(prompter.prompts_issued(), 3);
    }

    #[test]
    fn test_retry_input_exhausts_after_five_attempts() {
        let prompter =
            ScriptedPrompter::new().with_inputs(&["x", "x", "x", "x", "x", "never-read"]);
        let result: Result<String> = retry_input(&prompter, "name", None, |_| {
            Err(SetupError::invalid("taken"))
        });

        let err = result.unwrap_err();
        let setup_err = err.downcast_ref::<SetupError>().unwrap();
        assert!(matches!(setup_err, SetupError::RetriesExhausted(5)));
        // The sixth scripted answer must never be consumed.
        assert_eq!(prompter.prompts_issued(), MAX_PROMPT_RETRIES);
    }

    #[test]
    fn test_empty_scripted_answer_takes_default() {
        let prompter = ScriptedPrompter::new().with_inputs(&[""]);
        let value: String =
            retry_input(&prompter, "source dir", Some("functions"), |v| Ok(v.to_string()))
                .unwrap();
        assert_eq!(value, "functions");
    }
}
