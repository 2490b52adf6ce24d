//! `speedctl interactive`: single-key speed control.

use anyhow::Result;
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyEventKind},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::path::Path;

use speedctl::cli::VideoArgs;
use speedctl::display::render_panel;
use speedctl::session::{Action, Session, StepOutcome};
use speedctl::theme::{current_theme, Theme};

/// Key hints printed above the live display.
const KEY_HINTS: &str = "d: double | 1-9: speed button | r: reset | s: show | q: quit";

/// Handle `speedctl interactive`.
#[cfg(not(tarpaulin_include))]
pub fn handle_interactive(video: &VideoArgs, config_override: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_override)?;
    let mut session = super::start_session(video, &config);
    let theme = current_theme();
    let mut stdout = io::stdout();

    println!("{}", theme.secondary_text(KEY_HINTS));

    terminal::enable_raw_mode()?;
    let result = event_loop(&mut session, &theme, &mut stdout);
    // Restore the terminal even if the loop failed
    terminal::disable_raw_mode()?;
    writeln!(stdout)?;

    session.detach();
    result
}

#[cfg(not(tarpaulin_include))]
fn event_loop(session: &mut Session, theme: &Theme, stdout: &mut io::Stdout) -> Result<()> {
    draw(stdout, session, theme, None)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = Action::from_key(key) else {
            continue;
        };

        let outcome = session.apply(&action);
        if outcome == StepOutcome::Quit {
            return Ok(());
        }
        draw(stdout, session, theme, outcome.note())?;
    }
}

/// Redraw the display on the current line.
fn draw<W: Write>(out: &mut W, session: &Session, theme: &Theme, note: Option<String>) -> Result<()> {
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(render_panel(&session.panel(), theme))
    )?;
    if let Some(note) = note {
        queue!(out, Print(format!("  {}", theme.error_text(&note))))?;
    }
    out.flush()?;
    Ok(())
}
