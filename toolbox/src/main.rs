//! Functional toolbox CLI.
//!
//! Replays JSON action scripts through the counter slice reducer and manages
//! the `toolbox.toml` replay config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use toolbox::io::config::{
    DEFAULT_CONFIG_PATH, ReplayConfig, load_config, render_config, write_config,
};
use toolbox::logging;
use toolbox::replay::replay_file;

#[derive(Parser)]
#[command(
    name = "toolbox",
    version,
    about = "Replay action scripts through a slice reducer"
)]
struct Cli {
    /// Path to the replay config.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective config as TOML.
    Config,
    /// Fold a JSON array of actions through the counter and print the outcome.
    Replay {
        /// JSON file containing `[{"type": ..., "payload": ...}, ...]`.
        actions: PathBuf,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Config => cmd_config(&cli.config),
        Command::Replay { actions } => cmd_replay(&cli.config, &actions),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &ReplayConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    info!(path = %config_path.display(), "config written");
    Ok(())
}

fn cmd_config(config_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;
    print!("{}", render_config(&cfg)?);
    Ok(())
}

fn cmd_replay(config_path: &Path, actions_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;
    let outcome = replay_file(&cfg, actions_path)?;
    let payload = serde_json::to_string_pretty(&outcome).context("serialize outcome")?;
    println!("{payload}");
    Ok(())
}
