//! Video element access.
//!
//! The controller never looks elements up by itself. Callers pass a
//! [`VideoElement`] handle into each operation; [`Video`] is the in-memory
//! implementation used by the session harness and the tests.
//!
//! # Module Structure
//!
//! - `element`: the `VideoElement` trait, listener callback and id types
//! - `listeners`: listener registry and the `Subscription` handle
//! - `video`: in-memory `Video` with queued rate-change notifications
//! - `error`: `MediaError`

mod element;
mod error;
mod listeners;
mod video;

pub use element::{ListenerId, RateListener, VideoElement};
pub use error::MediaError;
pub use listeners::Subscription;
pub use video::Video;
