//! Playback speed control.
//!
//! Reads and writes a video's playback rate, keeps it within
//! `[MIN_RATE, MAX_RATE]`, and mirrors it into a speed display.
//!
//! ```
//! use speedctl::display::SpeedPanel;
//! use speedctl::media::Video;
//! use speedctl::speed::{double_speed, SpeedOutcome};
//!
//! let mut video = Video::new();
//! let mut panel = SpeedPanel::new().with_label().with_button("2");
//!
//! let outcome = double_speed(Some(&mut video), &mut panel);
//! assert_eq!(outcome, SpeedOutcome::applied(1.0, 2.0));
//! assert_eq!(panel.label(), Some("2.00x"));
//! ```

mod controller;
mod outcome;
pub mod rate;

pub use controller::{
    attach, current_speed, double_speed, is_speed_control_supported, reset_speed,
    set_playback_speed, update_speed_display,
};
pub use outcome::{SkipReason, SpeedOutcome};
pub use rate::{clamp_rate, format_rate, parse_leading_rate, DEFAULT_RATE, MAX_RATE, MIN_RATE};
