//! chirpview - waveform preprocessing and selection core for bioacoustic tools.
//!
//! The crate has two halves that share nothing but the error type:
//!
//! - [`preprocessing`] turns a mono sample buffer into pre-emphasized,
//!   overlapping, zero-padded analysis frames.
//! - [`view`] maps waveform panel pixels to signal time and turns pointer
//!   input into selection and viewport events for the full and partial
//!   waveform views.
//!
//! The `chirpview` binary exposes both through the `frames` and `replay`
//! commands.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod preprocessing;
pub mod view;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{Config, config_file_path, load_config, save_config};
use std::path::{Path, PathBuf};

pub use error::{Error, Result};

/// Main entry point for the chirpview CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Config { action } => handle_config_command(action, cli.config.as_deref()),
        Command::Frames(args) => {
            let config = load_config(cli.config.as_deref())?;
            cli::frames::run_frames(&args, &config)
        }
        Command::Replay(args) => {
            let config = load_config(cli.config.as_deref())?;
            cli::replay::run_replay(&args, &config)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // stdout carries frames and events, so logs always go to stderr
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(config_file_path, |path| Ok(path.to_path_buf()))
}

fn handle_config_command(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = resolve_config_path(explicit)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{rendered}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = resolve_config_path(explicit)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
