//! A page-like context wiring one video to one speed panel.
//!
//! The session owns the handles the controller needs and passes them in
//! explicitly on every action. After each action it runs one event-loop
//! tick so queued rate-change notifications reach the panel.

mod action;

pub use action::{Action, ActionParseError};

use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::warn;

use crate::config::{Config, VideoConfig};
use crate::display::SpeedPanel;
use crate::media::{Subscription, Video, VideoElement};
use crate::speed::{self, SkipReason, SpeedOutcome};

/// What kind of video element the session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoPresence {
    /// A video with a playback rate
    Supported,
    /// A video without a playback rate
    Unsupported,
    /// No video element at all
    Missing,
}

impl VideoPresence {
    /// Presence described by the `[video]` config section.
    pub fn from_config(config: &VideoConfig) -> Self {
        if config.rate_supported {
            Self::Supported
        } else {
            Self::Unsupported
        }
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// A controller operation ran
    Speed { outcome: SpeedOutcome },
    /// A direct write to the video, bypassing the controller
    External { rate: f64, accepted: bool },
    /// The pressed button does not exist
    UnknownButton { button: String },
    /// Nothing changed
    Shown,
    /// The session should end
    Quit,
}

impl StepOutcome {
    fn speed(outcome: SpeedOutcome) -> Self {
        Self::Speed { outcome }
    }

    /// Short note for terminal output, `None` when the step needs no comment.
    pub fn note(&self) -> Option<String> {
        match self {
            Self::Speed { outcome } => outcome
                .skip_reason()
                .map(|reason| format!("skipped: {}", reason)),
            Self::External { accepted: false, .. } => Some("rejected by video".to_string()),
            Self::UnknownButton { button } => Some(format!("no speed button '{}'", button)),
            Self::External { .. } | Self::Shown | Self::Quit => None,
        }
    }
}

/// Snapshot of the session after a step, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub action: String,
    pub outcome: StepOutcome,
    /// The video's raw rate (`None` without a video or rate property)
    pub rate: Option<f64>,
    pub label: Option<String>,
    pub active: Vec<String>,
}

fn video_handle(video: &mut Option<Video>) -> Option<&mut dyn VideoElement> {
    video.as_mut().map(|v| v as &mut dyn VideoElement)
}

/// One video, one speed panel, and the subscription linking them.
#[derive(Debug)]
pub struct Session {
    video: Option<Video>,
    panel: Rc<RefCell<SpeedPanel>>,
    subscription: Option<Subscription>,
}

impl Session {
    /// Create a session. Call [`Session::attach`] before applying actions.
    pub fn new(video: Option<Video>, panel: SpeedPanel) -> Self {
        Self {
            video,
            panel: Rc::new(RefCell::new(panel)),
            subscription: None,
        }
    }

    /// Build the video and panel described by `config`.
    pub fn from_config(config: &Config, presence: VideoPresence) -> Self {
        let video = match presence {
            VideoPresence::Supported => Some(Video::with_rate(config.video.initial_rate)),
            VideoPresence::Unsupported => Some(Video::without_rate_support()),
            VideoPresence::Missing => None,
        };
        Self::new(video, SpeedPanel::from_config(&config.display))
    }

    /// Run page-ready initialization. Safe to call more than once.
    ///
    /// Returns whether speed controls are live.
    pub fn attach(&mut self) -> bool {
        if self.subscription.is_none() {
            self.subscription = speed::attach(video_handle(&mut self.video), &self.panel);
        }
        self.subscription.is_some()
    }

    /// Drop the rate-change subscription. Returns false if there was none.
    pub fn detach(&mut self) -> bool {
        match (self.subscription.take(), self.video.as_mut()) {
            (Some(subscription), Some(video)) => subscription.unsubscribe(video),
            _ => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Apply one action, then deliver pending rate-change notifications.
    pub fn apply(&mut self, action: &Action) -> StepOutcome {
        let outcome = match action {
            Action::Double => StepOutcome::speed(speed::double_speed(
                video_handle(&mut self.video),
                &mut self.panel,
            )),
            Action::Set(requested) => StepOutcome::speed(speed::set_playback_speed(
                video_handle(&mut self.video),
                &mut self.panel,
                *requested,
            )),
            Action::Reset => StepOutcome::speed(speed::reset_speed(
                video_handle(&mut self.video),
                &mut self.panel,
            )),
            Action::Press(id) => {
                let button_speed = self.panel.borrow().button(id).map(|b| b.speed());
                self.press(id.clone(), button_speed)
            }
            Action::PressNth(position) => {
                let button = self
                    .panel
                    .borrow()
                    .nth_button(*position)
                    .map(|b| (b.id.clone(), b.speed()));
                match button {
                    Some((id, speed)) => self.press(id, Some(speed)),
                    None => self.press(format!("#{}", position), None),
                }
            }
            Action::External(rate) => self.external(*rate),
            Action::Show => StepOutcome::Shown,
            Action::Quit => StepOutcome::Quit,
        };
        self.tick();
        outcome
    }

    /// Click a button. `button_speed` is `None` when the button is missing,
    /// `Some(None)` when its value is not a number.
    fn press(&mut self, id: String, button_speed: Option<Option<f64>>) -> StepOutcome {
        match button_speed {
            Some(speed) => StepOutcome::speed(speed::set_playback_speed(
                video_handle(&mut self.video),
                &mut self.panel,
                speed.unwrap_or(f64::NAN),
            )),
            None => {
                warn!("No speed button '{}'", id);
                StepOutcome::UnknownButton { button: id }
            }
        }
    }

    fn external(&mut self, rate: f64) -> StepOutcome {
        let accepted = match self.video.as_mut() {
            Some(video) => match video.set_playback_rate(rate) {
                Ok(()) => true,
                Err(e) => {
                    warn!("External rate change rejected: {}", e);
                    false
                }
            },
            None => {
                warn!("{}", SkipReason::NoVideoElement);
                false
            }
        };
        StepOutcome::External { rate, accepted }
    }

    /// Deliver queued rate-change notifications.
    fn tick(&mut self) -> usize {
        self.video.as_mut().map_or(0, Video::dispatch_events)
    }

    /// The panel as it currently reads.
    pub fn panel(&self) -> Ref<'_, SpeedPanel> {
        self.panel.borrow()
    }

    pub fn video(&self) -> Option<&Video> {
        self.video.as_ref()
    }

    /// Current speed as the controller reads it.
    pub fn current_speed(&self) -> f64 {
        speed::current_speed(self.video.as_ref().map(|v| v as &dyn VideoElement))
    }

    pub fn is_speed_control_supported(&self) -> bool {
        speed::is_speed_control_supported(self.video.as_ref().map(|v| v as &dyn VideoElement))
    }

    /// Snapshot for reporting after `action` produced `outcome`.
    pub fn report(&self, action: &Action, outcome: StepOutcome) -> StepReport {
        let panel = self.panel.borrow();
        StepReport {
            action: action.to_string(),
            outcome,
            rate: self.video.as_ref().and_then(|v| v.playback_rate()),
            label: panel.label().map(str::to_string),
            active: panel.active_buttons().into_iter().map(str::to_string).collect(),
        }
    }
}
