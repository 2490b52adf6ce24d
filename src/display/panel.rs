//! In-memory speed panel: an optional label and a row of speed buttons.

use serde::Serialize;

use super::surface::{ButtonSpeed, SpeedDisplay};
use crate::config::DisplayConfig;
use crate::speed::parse_leading_rate;

/// A button that selects a playback speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedButton {
    /// Identifier used to press the button
    pub id: String,
    /// Speed value as declared (parsed on every query)
    pub value: String,
    /// Whether the button is highlighted
    pub active: bool,
}

impl SpeedButton {
    /// Create an inactive button.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            active: false,
        }
    }

    /// The number the declared value starts with, so `"2x"` reads as 2.0.
    pub fn speed(&self) -> Option<f64> {
        parse_leading_rate(&self.value)
    }
}

/// Label plus buttons, owned by the caller.
///
/// Button ids map to speed values; the controller only sees that mapping
/// through [`SpeedDisplay`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeedPanel {
    label: Option<String>,
    buttons: Vec<SpeedButton>,
}

impl SpeedPanel {
    /// Create a panel with no label and no buttons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an (empty) speed label.
    pub fn with_label(mut self) -> Self {
        self.label = Some(String::new());
        self
    }

    /// Add a button whose id is its declared value.
    pub fn with_button(self, value: &str) -> Self {
        self.with_named_button(value, value)
    }

    /// Add a button with an explicit id.
    ///
    /// Ids are unique within a panel: reusing one replaces that button's value
    /// and keeps its position.
    pub fn with_named_button(mut self, id: &str, value: &str) -> Self {
        match self.buttons.iter_mut().find(|b| b.id == id) {
            Some(existing) => value.clone_into(&mut existing.value),
            None => self.buttons.push(SpeedButton::new(id, value)),
        }
        self
    }

    /// Build a panel from the `[display]` config section.
    pub fn from_config(config: &DisplayConfig) -> Self {
        let panel = if config.show_label {
            Self::new().with_label()
        } else {
            Self::new()
        };
        config
            .buttons
            .iter()
            .fold(panel, |panel, value| panel.with_button(value))
    }

    /// Label text, or `None` if the panel has no label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn buttons(&self) -> &[SpeedButton] {
        &self.buttons
    }

    /// Ids of the highlighted buttons, in panel order.
    pub fn active_buttons(&self) -> Vec<&str> {
        self.buttons
            .iter()
            .filter(|b| b.active)
            .map(|b| b.id.as_str())
            .collect()
    }

    /// Find a button by id.
    pub fn button(&self, id: &str) -> Option<&SpeedButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Find a button by its 1-based position.
    pub fn nth_button(&self, position: usize) -> Option<&SpeedButton> {
        position
            .checked_sub(1)
            .and_then(|index| self.buttons.get(index))
    }
}

impl SpeedDisplay for SpeedPanel {
    fn set_label_text(&mut self, text: &str) -> bool {
        match self.label.as_mut() {
            Some(label) => {
                text.clone_into(label);
                true
            }
            None => false,
        }
    }

    fn speed_buttons(&self) -> Vec<ButtonSpeed> {
        self.buttons
            .iter()
            .map(|b| ButtonSpeed {
                id: b.id.clone(),
                speed: b.speed(),
            })
            .collect()
    }

    fn set_button_active(&mut self, id: &str, active: bool) {
        for button in self.buttons.iter_mut().filter(|b| b.id == id) {
            button.active = active;
        }
    }
}
