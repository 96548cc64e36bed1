//! CLI argument definitions.

use crate::cli::validators::{parse_alpha, parse_frame_length};
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Waveform preprocessing and selection tooling for bioacoustic recordings.
#[derive(Debug, Parser)]
#[command(name = "chirpview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Use this configuration file instead of the platform default.
    #[arg(long, global = true, env = "CHIRPVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pre-emphasize and frame a PCM WAV file.
    Frames(FramesArgs),
    /// Drive a selection session from a JSON script and print its events.
    Replay(ReplayArgs),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the frames command.
#[derive(Debug, Args)]
pub struct FramesArgs {
    /// Input WAV file.
    pub input: PathBuf,

    /// Pre-emphasis coefficient (0.0-1.0).
    #[arg(short, long, value_parser = parse_alpha, env = "CHIRPVIEW_ALPHA")]
    pub alpha: Option<f32>,

    /// Skip pre-emphasis and frame the raw samples.
    #[arg(long, conflicts_with = "alpha")]
    pub no_pre_emphasis: bool,

    /// Samples per frame.
    #[arg(short = 'n', long, value_parser = parse_frame_length, env = "CHIRPVIEW_FRAME_LENGTH")]
    pub frame_length: Option<usize>,

    /// Samples shared by consecutive frames.
    #[arg(long, env = "CHIRPVIEW_OVERLAP")]
    pub overlap: Option<usize>,

    /// Output format.
    #[arg(short, long, env = "CHIRPVIEW_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Output directory (defaults to the input file's directory).
    #[arg(short, long, env = "CHIRPVIEW_OUTPUT_DIR", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Write frames to stdout instead of a file.
    #[arg(long)]
    pub stdout: bool,

    /// Overwrite an existing output file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the replay command.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Replay script (JSON).
    pub script: PathBuf,

    /// Minimum interval between processed drag/move events in ms.
    #[arg(long, env = "CHIRPVIEW_MOTION_INTERVAL_MS")]
    pub motion_interval_ms: Option<u64>,

    /// Write events to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
