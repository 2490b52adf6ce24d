//! speedctl - playback speed control from the terminal

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use speedctl::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise warnings only, or info with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let ansi = std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_override = cli.config.as_deref();

    match cli.command {
        Commands::Run(args) => commands::run::handle_run(&args, config_override),
        Commands::Interactive(video) => {
            commands::interactive::handle_interactive(&video, config_override)
        }
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(config_override),
            ConfigCommands::Path => commands::config::handle_path(config_override),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(config_override, force)
            }
        },
        Commands::Completions { shell } => commands::completions::handle_completions(shell),
    }
}
