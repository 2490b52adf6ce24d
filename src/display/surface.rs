//! SpeedDisplay trait.

use std::cell::RefCell;
use std::rc::Rc;

/// A speed button as seen by the controller: its id and the speed it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpeed {
    /// Button identifier, unique within a display
    pub id: String,
    /// Parsed speed value, `None` if the stored value is not a number
    pub speed: Option<f64>,
}

/// UI elements that mirror the current playback rate.
///
/// The controller queries buttons on every update and keeps nothing between
/// calls, so implementations may add or remove buttons freely.
pub trait SpeedDisplay {
    /// Set the speed label's text.
    ///
    /// Returns false (and does nothing) if there is no label.
    fn set_label_text(&mut self, text: &str) -> bool;

    /// All speed buttons with the speed each one selects.
    fn speed_buttons(&self) -> Vec<ButtonSpeed>;

    /// Mark a button active or inactive. Unknown ids are ignored.
    fn set_button_active(&mut self, id: &str, active: bool);
}

/// Shared displays borrow only for the duration of each call, so the same
/// panel can sit behind a rate listener and a direct caller at once.
impl<T: SpeedDisplay> SpeedDisplay for Rc<RefCell<T>> {
    fn set_label_text(&mut self, text: &str) -> bool {
        self.borrow_mut().set_label_text(text)
    }

    fn speed_buttons(&self) -> Vec<ButtonSpeed> {
        self.borrow().speed_buttons()
    }

    fn set_button_active(&mut self, id: &str, active: bool) {
        self.borrow_mut().set_button_active(id, active)
    }
}
