//! Firefn -- Functions Codebase Initializer
//!
//! Interactive CLI that initializes or re-initializes a named functions
//! codebase in a project: source directory, codebase name, language, and
//! starter scaffolding.

pub mod types;
pub mod error;
pub mod config;
pub mod prompt;
pub mod gcp;
pub mod setup;
pub mod scaffold;
