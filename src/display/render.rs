//! One-line terminal rendering of a speed panel.

use super::panel::SpeedPanel;
use crate::theme::Theme;

/// Separator between the label and the button row.
const SEPARATOR: &str = " | ";

/// Gap between buttons.
const BUTTON_GAP: &str = "  ";

/// Render a panel as a single line.
///
/// The label shows its text (`-` while still empty). Active buttons are
/// bracketed and drawn in the accent color, inactive ones dimmed:
///
/// ```text
/// 2.00x | 0.5  1  1.5  [2]  4
/// ```
pub fn render_panel(panel: &SpeedPanel, theme: &Theme) -> String {
    let mut parts = Vec::with_capacity(2);

    if let Some(text) = panel.label() {
        let text = if text.is_empty() { "-" } else { text };
        parts.push(theme.primary_text(text));
    }

    if !panel.buttons().is_empty() {
        let buttons: Vec<String> = panel
            .buttons()
            .iter()
            .map(|button| {
                if button.active {
                    theme.accent_text(&format!("[{}]", button.id))
                } else {
                    theme.secondary_text(&button.id)
                }
            })
            .collect();
        parts.push(buttons.join(BUTTON_GAP));
    }

    if parts.is_empty() {
        return theme.secondary_text("(no speed display)");
    }

    let separator = theme.secondary_text(SEPARATOR);
    parts.join(separator.as_str())
}
