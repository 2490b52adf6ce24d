//! `speedctl run`: apply speed commands and print the display after each.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use speedctl::cli::RunArgs;
use speedctl::display::render_panel;
use speedctl::session::{Action, Session, StepOutcome};
use speedctl::theme::{current_theme, Theme};

/// Handle `speedctl run`.
pub fn handle_run(args: &RunArgs, config_override: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_override)?;

    // Parse everything up front so a typo fails before any step runs
    let actions = args
        .commands
        .iter()
        .map(|command| {
            command
                .parse::<Action>()
                .with_context(|| format!("Invalid command '{}'", command))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = super::start_session(&args.video, &config);
    let theme = current_theme();
    let mut stdout = io::stdout().lock();
    run_actions(&mut session, &actions, args.json, &theme, &mut stdout)
}

/// Apply `actions` in order, writing one line per step. Stops at `quit`.
pub fn run_actions<W: Write>(
    session: &mut Session,
    actions: &[Action],
    json: bool,
    theme: &Theme,
    out: &mut W,
) -> Result<()> {
    if !json {
        writeln!(out, "init: {}", render_panel(&session.panel(), theme))?;
    }

    for action in actions {
        let outcome = session.apply(action);
        if outcome == StepOutcome::Quit {
            break;
        }

        if json {
            let report = session.report(action, outcome);
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            let mut line = format!("{}: {}", action, render_panel(&session.panel(), theme));
            if let Some(note) = outcome.note() {
                line.push_str(&format!("  ({})", theme.error_text(&note)));
            }
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}
