//! speedctl - playback speed control for video elements
//!
//! A small library that doubles, sets and resets a video's playback rate,
//! keeps it within `[0.25, 4.0]`, and mirrors the current value into a speed
//! label and a row of speed buttons. Video and display are passed in as
//! explicit handles, so everything runs without a rendering environment.
//!
//! - [`speed`]: the controller operations and rate arithmetic
//! - [`media`]: the `VideoElement` seam and the in-memory `Video`
//! - [`display`]: the `SpeedDisplay` seam, `SpeedPanel`, terminal rendering
//! - [`session`]: one video wired to one panel, driven by `Action`s
//! - [`config`]: TOML configuration

pub mod cli;
pub mod config;
pub mod display;
pub mod media;
pub mod session;
pub mod speed;
pub mod theme;

pub use config::Config;
pub use display::{SpeedDisplay, SpeedPanel};
pub use media::{Video, VideoElement};
pub use session::{Action, Session};
pub use speed::{SkipReason, SpeedOutcome};
