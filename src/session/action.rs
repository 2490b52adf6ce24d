//! Actions a user can trigger, parsed from text commands or key presses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::str::FromStr;

/// Something the user asked the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Double the speed
    Double,
    /// Set a specific speed (clamped by the controller)
    Set(f64),
    /// Back to 1x
    Reset,
    /// Click the speed button with this id
    Press(String),
    /// Click the n-th speed button (1-based)
    PressNth(usize),
    /// Another actor writes the video's rate directly, bypassing the controller
    External(f64),
    /// Print the panel without changing anything
    Show,
    /// Leave the session
    Quit,
}

/// Errors from parsing a text command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (expected double, set, reset, press, external, show or quit)")]
    Unknown(String),

    #[error("Command '{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid speed '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected extra input '{0}'")]
    TrailingInput(String),
}

fn parse_speed(command: &'static str, arg: Option<&str>) -> Result<f64, ActionParseError> {
    let arg = arg.ok_or(ActionParseError::MissingArgument {
        command,
        expected: "a speed",
    })?;
    arg.parse::<f64>()
        .map_err(|_| ActionParseError::InvalidNumber(arg.to_string()))
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parse commands like `double`, `set 1.5`, `press 2`, `external 8`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let command = words.next().ok_or(ActionParseError::Empty)?;
        let arg = words.next();

        let action = match command.to_ascii_lowercase().as_str() {
            "double" | "+" => Action::Double,
            "reset" | "normal" => Action::Reset,
            "set" | "speed" => Action::Set(parse_speed("set", arg)?),
            "external" => Action::External(parse_speed("external", arg)?),
            "press" | "click" => {
                let id = arg.ok_or(ActionParseError::MissingArgument {
                    command: "press",
                    expected: "a button id",
                })?;
                Action::Press(id.to_string())
            }
            "show" | "status" => Action::Show,
            "quit" | "exit" | "q" => Action::Quit,
            other => return Err(ActionParseError::Unknown(other.to_string())),
        };

        // Only set/external/press take an argument
        let takes_arg = matches!(
            action,
            Action::Set(_) | Action::External(_) | Action::Press(_)
        );
        let extra = if takes_arg { words.next() } else { arg };
        if let Some(extra) = extra {
            return Err(ActionParseError::TrailingInput(extra.to_string()));
        }

        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Double => write!(f, "double"),
            Action::Set(speed) => write!(f, "set {}", speed),
            Action::Reset => write!(f, "reset"),
            Action::Press(id) => write!(f, "press {}", id),
            Action::PressNth(n) => write!(f, "press #{}", n),
            Action::External(rate) => write!(f, "external {}", rate),
            Action::Show => write!(f, "show"),
            Action::Quit => write!(f, "quit"),
        }
    }
}

impl Action {
    /// Map a key press to an action.
    ///
    /// `d`/`+`/`=` double, `r`/`0` reset, `1`-`9` press the n-th button,
    /// `s` show, `q`/Esc/Ctrl-C quit. Other keys map to nothing.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('d') | KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Double),
            KeyCode::Char('r') | KeyCode::Char('0') => Some(Action::Reset),
            KeyCode::Char('s') => Some(Action::Show),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|n| Action::PressNth(n as usize)),
            _ => None,
        }
    }
}
