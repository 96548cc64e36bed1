//! CLI argument parsing and command handling.

mod args;
pub mod frames;
pub mod replay;
pub mod validators;

pub use args::{Cli, Command, ConfigAction, FramesArgs, ReplayArgs};
