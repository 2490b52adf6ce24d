//! In-memory video element.

use tracing::debug;

use super::element::{ListenerId, RateListener, VideoElement};
use super::error::MediaError;
use super::listeners::RateListeners;
use crate::speed::DEFAULT_RATE;

/// A video element held entirely in memory.
///
/// Rate writes are stored immediately. Notifications are queued and only
/// reach listeners when [`Video::dispatch_events`] runs, the way a page's
/// event loop delivers `ratechange` after the writing script returns.
#[derive(Debug)]
pub struct Video {
    /// `None` when the element has no rate property
    rate: Option<f64>,
    /// Rate-change notifications not yet delivered
    pending: usize,
    listeners: RateListeners,
}

impl Video {
    /// Create an element playing at normal speed.
    pub fn new() -> Self {
        Self::with_rate(DEFAULT_RATE)
    }

    /// Create an element with a starting rate.
    ///
    /// The value is taken as-is; elements are free to start outside the
    /// controller's range.
    pub fn with_rate(rate: f64) -> Self {
        Self {
            rate: Some(rate),
            pending: 0,
            listeners: RateListeners::new(),
        }
    }

    /// Create an element that lacks the rate property.
    pub fn without_rate_support() -> Self {
        Self {
            rate: None,
            pending: 0,
            listeners: RateListeners::new(),
        }
    }

    /// Number of notifications waiting for dispatch.
    #[cfg(test)]
    fn pending_events(&self) -> usize {
        self.pending
    }

    /// Number of registered rate listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver queued rate-change notifications.
    ///
    /// Each notification carries the rate at dispatch time, not at write
    /// time. Returns how many were delivered.
    pub fn dispatch_events(&mut self) -> usize {
        let count = std::mem::take(&mut self.pending);
        if let Some(rate) = self.rate {
            for _ in 0..count {
                self.listeners.notify(rate);
            }
        }
        if count > 0 {
            debug!(count, listeners = self.listeners.len(), "dispatched ratechange");
        }
        count
    }
}

impl Default for Video {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoElement for Video {
    fn playback_rate(&self) -> Option<f64> {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) -> Result<(), MediaError> {
        let current = self.rate.ok_or(MediaError::RateUnsupported)?;
        if !rate.is_finite() {
            return Err(MediaError::NonFinite(rate));
        }
        if current != rate {
            self.rate = Some(rate);
            self.pending += 1;
        }
        Ok(())
    }

    fn add_rate_listener(&mut self, listener: RateListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_rate_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
