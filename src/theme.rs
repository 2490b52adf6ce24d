//! Theme configuration for CLI output
//!
//! Centralizes the colors used by the panel renderer and command output.
//! Colors are emitted as ANSI escape codes and dropped entirely when
//! `NO_COLOR` is set or stdout is not a terminal.

use crossterm::style::Color;

/// Theme configuration for terminal output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether escape codes are emitted at all
    pub enabled: bool,
    /// Primary text color (speed label)
    pub text_primary: Color,
    /// Secondary/dimmed text color (inactive buttons, separators)
    pub text_secondary: Color,
    /// Accent color for the active speed button
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Gray text with a green accent for the active speed.
    pub fn standard() -> Self {
        Self {
            enabled: true,
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            accent: Color::DarkGreen,
            error: Color::DarkRed,
            success: Color::DarkGreen,
        }
    }

    /// Same palette with escape codes switched off.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::standard()
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a crossterm Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

/// Whether colored output should be used for stdout.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Theme for the current process (plain when color is disabled).
pub fn current_theme() -> Theme {
    if color_enabled() {
        Theme::standard()
    } else {
        Theme::plain()
    }
}
