//! Playback speed operations.
//!
//! Each operation takes the video and display handles it works on. With no
//! video, or a video without a rate property, the operation logs a warning
//! and returns [`SpeedOutcome::Skipped`] without touching the display.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};

use super::outcome::{SkipReason, SpeedOutcome};
use super::rate::{clamp_rate, doubled, effective_rate, format_rate, rate_matches, DEFAULT_RATE};
use crate::display::SpeedDisplay;
use crate::media::{MediaError, Subscription, VideoElement};

/// Log and build a skipped outcome.
fn skip(reason: SkipReason) -> SpeedOutcome {
    warn!("{}", reason);
    SpeedOutcome::skipped(reason)
}

/// Write `rate` to `video`, mapping element errors to skip reasons.
fn write_rate(video: &mut dyn VideoElement, rate: f64) -> Result<(), SpeedOutcome> {
    video.set_playback_rate(rate).map_err(|e| match e {
        MediaError::RateUnsupported => skip(SkipReason::RateUnsupported),
        MediaError::NonFinite(_) => skip(SkipReason::NotANumber),
    })
}

/// Double the playback speed, capped at 4x.
///
/// Reads the current rate (1.0 if absent, zero or NaN) and applies
/// `min(current * 2, 4.0)`.
pub fn double_speed(
    video: Option<&mut dyn VideoElement>,
    display: &mut dyn SpeedDisplay,
) -> SpeedOutcome {
    let Some(video) = video else {
        return skip(SkipReason::NoVideoElement);
    };
    let Some(raw) = video.playback_rate() else {
        return skip(SkipReason::RateUnsupported);
    };

    let current = effective_rate(Some(raw));
    let next = doubled(current);
    if let Err(outcome) = write_rate(video, next) {
        return outcome;
    }

    info!("Playback speed changed from {}x to {}x", current, next);
    update_speed_display(display, next);
    SpeedOutcome::applied(current, next)
}

/// Set the playback speed, clamped into `[0.25, 4.0]`.
pub fn set_playback_speed(
    video: Option<&mut dyn VideoElement>,
    display: &mut dyn SpeedDisplay,
    requested: f64,
) -> SpeedOutcome {
    let Some(video) = video else {
        return skip(SkipReason::NoVideoElement);
    };
    if requested.is_nan() {
        return skip(SkipReason::NotANumber);
    }

    let previous = current_speed(Some(&*video));
    let valid = clamp_rate(requested);
    if let Err(outcome) = write_rate(video, valid) {
        return outcome;
    }

    info!("Playback speed set to {}x", valid);
    update_speed_display(display, valid);
    SpeedOutcome::applied(previous, valid)
}

/// Reset the playback speed to 1x.
pub fn reset_speed(
    video: Option<&mut dyn VideoElement>,
    display: &mut dyn SpeedDisplay,
) -> SpeedOutcome {
    let Some(video) = video else {
        return skip(SkipReason::NoVideoElement);
    };

    let previous = current_speed(Some(&*video));
    if let Err(outcome) = write_rate(video, DEFAULT_RATE) {
        return outcome;
    }

    info!("Playback speed reset to 1x");
    update_speed_display(display, DEFAULT_RATE);
    SpeedOutcome::applied(previous, DEFAULT_RATE)
}

/// Current playback speed.
///
/// 1.0 when there is no video, no rate property, or the rate is zero/NaN.
pub fn current_speed(video: Option<&dyn VideoElement>) -> f64 {
    effective_rate(video.and_then(|v| v.playback_rate()))
}

/// Whether a video is present and exposes a playback rate.
pub fn is_speed_control_supported(video: Option<&dyn VideoElement>) -> bool {
    video.is_some_and(|v| v.supports_playback_rate())
}

/// Mirror `speed` into the display.
///
/// Sets the label to e.g. `2.50x` and highlights exactly the buttons whose
/// speed equals `speed`.
pub fn update_speed_display(display: &mut dyn SpeedDisplay, speed: f64) {
    display.set_label_text(&format_rate(speed));

    for button in display.speed_buttons() {
        let active = button.speed.is_some_and(|s| rate_matches(s, speed));
        display.set_button_active(&button.id, active);
    }
}

/// Initialize speed controls for a page.
///
/// With a rate-capable video: shows its current speed and subscribes to its
/// rate changes so changes made by anyone refresh `display`. Otherwise logs a
/// warning and returns `None`.
///
/// Rates reported by the element are clamped before display, since another
/// actor may have written a value outside the controller's range.
pub fn attach<D>(
    video: Option<&mut dyn VideoElement>,
    display: &Rc<RefCell<D>>,
) -> Option<Subscription>
where
    D: SpeedDisplay + 'static,
{
    let video = match video {
        Some(video) if video.supports_playback_rate() => video,
        _ => {
            warn!("Video speed controls are not supported");
            return None;
        }
    };

    info!("Video speed controls are supported");
    let mut shared = Rc::clone(display);
    update_speed_display(&mut shared, clamp_rate(current_speed(Some(&*video))));

    let id = video.add_rate_listener(Box::new(move |rate| {
        update_speed_display(&mut shared, clamp_rate(effective_rate(Some(rate))));
    }));
    Some(Subscription::new(id))
}
