//! Rate listener registry and subscription handles.

use super::element::{ListenerId, RateListener, VideoElement};

/// Ordered set of rate listeners owned by an element.
///
/// Listeners are notified in registration order. Ids are never reused.
#[derive(Default)]
pub(crate) struct RateListeners {
    next_id: u64,
    entries: Vec<(ListenerId, RateListener)>,
}

impl RateListeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its id.
    pub fn add(&mut self, listener: RateListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every listener with `rate`.
    pub fn notify(&mut self, rate: f64) {
        for (_, listener) in self.entries.iter_mut() {
            listener(rate);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for RateListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateListeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}

/// A live rate-change subscription.
///
/// Dropping it does not unsubscribe; call [`Subscription::unsubscribe`] with
/// the element it was registered on.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a subscription is only removed by calling unsubscribe"]
pub struct Subscription {
    id: ListenerId,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId) -> Self {
        Self { id }
    }

    /// The listener id on the element.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the listener from `video`.
    ///
    /// Returns false if it was already gone (or `video` is a different element).
    pub fn unsubscribe(self, video: &mut dyn VideoElement) -> bool {
        video.remove_rate_listener(self.id)
    }
}
