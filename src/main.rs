//! Firefn CLI
//!
//! Entry point: parses CLI args, loads the project configuration, runs
//! the interactive setup flow, and persists the updated configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use firefn::config;
use firefn::gcp::client::HttpCloudApi;
use firefn::gcp::{CloudApi, OfflineCloud};
use firefn::prompt::TerminalPrompter;
use firefn::setup::setup_functions;
use firefn::types::{Setup, SetupOptions};

/// Functions codebase initializer
#[derive(Parser, Debug)]
#[command(name = "firefn", version, about = "Functions codebase initializer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize or re-initialize a functions codebase
    Init {
        /// Cloud project id (default: the `default` alias in .firebaserc)
        #[arg(long)]
        project: Option<String>,

        /// Project directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

async fn run_init(project: Option<String>, dir: Option<PathBuf>) -> Result<()> {
    let project_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Can't determine the current directory")?,
    };

    let mut config = config::load_config(&project_dir)?;
    let project_id = project.or_else(|| config::default_project_id(&project_dir));
    let options = SetupOptions {
        project_dir,
        project_id,
    };

    let prompter = TerminalPrompter::new();
    let mut setup = Setup::default();

    // Without a project id the flow skips every cloud step, so no access
    // token is required.
    let cloud: Box<dyn CloudApi> = if options.project_id.is_some() {
        Box::new(HttpCloudApi::new()?)
    } else {
        Box::new(OfflineCloud)
    };
    setup_functions(&mut setup, &mut config, &options, &prompter, cloud.as_ref()).await?;

    config::save_config(&options.project_dir, &config)?;
    println!();
    println!("{}", "  Functions setup complete.".green());
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Init { project, dir } => run_init(project, dir).await,
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
