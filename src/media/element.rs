//! VideoElement trait and listener types.

use super::error::MediaError;

/// Callback invoked with the element's playback rate when it changes.
pub type RateListener = Box<dyn FnMut(f64)>;

/// Handle for a registered rate listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// A video-capable element with a mutable playback rate.
///
/// Implementations wrap whatever actually plays the media. The controller
/// only ever reaches the element through this trait, so tests can hand it
/// an in-memory [`super::Video`].
pub trait VideoElement {
    /// Current playback rate, or `None` if the element has no rate property.
    fn playback_rate(&self) -> Option<f64>;

    /// Write the playback rate.
    ///
    /// The element queues a rate-change notification whenever the stored
    /// value actually changes, whoever the writer is.
    fn set_playback_rate(&mut self, rate: f64) -> Result<(), MediaError>;

    /// Register a callback for rate-change notifications.
    fn add_rate_listener(&mut self, listener: RateListener) -> ListenerId;

    /// Remove a previously registered callback.
    ///
    /// Returns false if the id was not registered.
    fn remove_rate_listener(&mut self, id: ListenerId) -> bool;

    /// Whether the element exposes a playback rate at all.
    fn supports_playback_rate(&self) -> bool {
        self.playback_rate().is_some()
    }
}
