//! Speed display elements.
//!
//! A display is whatever mirrors the current rate to the user: a label
//! showing `2.00x` and a row of buttons, one of which is highlighted.
//!
//! - `surface`: the `SpeedDisplay` trait the controller writes through
//! - `panel`: `SpeedPanel`, the in-memory label plus buttons
//! - `render`: terminal rendering of a panel

mod panel;
mod render;
mod surface;

pub use panel::{SpeedButton, SpeedPanel};
pub use render::render_panel;
pub use surface::{ButtonSpeed, SpeedDisplay};
