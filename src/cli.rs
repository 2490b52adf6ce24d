//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::session::VideoPresence;

/// Control a video's playback speed from the terminal.
#[derive(Parser, Debug)]
#[command(name = "speedctl", version, about, long_about = None)]
pub struct Cli {
    /// Log applied speed changes (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply speed commands in order and print the speed display after each
    #[command(after_help = "\
Commands:
  double          Double the speed (max 4x)
  set <SPEED>     Set the speed, clamped to 0.25-4
  reset           Back to 1x
  press <ID>      Click a speed button
  external <RATE> Write the video's rate directly, bypassing the controller
  show            Print the display unchanged

Example:
  speedctl run double \"set 0.1\" \"press 1.5\" reset")]
    Run(RunArgs),

    /// Control the speed with single key presses
    Interactive(VideoArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub video: VideoArgs,

    /// Print one JSON object per step
    #[arg(long)]
    pub json: bool,

    /// Speed commands, one per argument (quote multi-word ones)
    #[arg(value_name = "COMMAND", required = true, num_args = 1..)]
    pub commands: Vec<String>,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct VideoArgs {
    /// Start without a video element
    #[arg(long, conflicts_with = "unsupported")]
    pub no_video: bool,

    /// Start with a video element that has no playback rate
    #[arg(long)]
    pub unsupported: bool,
}

impl VideoArgs {
    /// Presence requested on the command line, if any.
    pub fn presence(&self) -> Option<VideoPresence> {
        if self.no_video {
            Some(VideoPresence::Missing)
        } else if self.unsupported {
            Some(VideoPresence::Unsupported)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
