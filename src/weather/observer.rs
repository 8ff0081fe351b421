use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;
use uuid::Uuid;

use super::measurement::Measurement;

/// Identity token for a registered observer.
///
/// Two displays can hold the same values at the same time, so the
/// registry compares these tokens instead of display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait DisplayElement {
    /// Renders the current state. May span several lines.
    fn display(&self) -> String;
}

pub trait Observer: DisplayElement {
    fn id(&self) -> ObserverId;
    fn update(&mut self, measurement: &Measurement);
}

pub type SharedObserver = Arc<Mutex<dyn Observer + Send>>;

/// One rendered output produced during a broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub observer: ObserverId,
    pub rendered: String,
}

/// Locks an observer handle, recovering the data if a previous holder panicked.
pub fn lock_observer<T: ?Sized>(observer: &Mutex<T>) -> MutexGuard<'_, T> {
    observer.lock().unwrap_or_else(|poisoned| {
        warn!("observer lock was poisoned, recovering");
        poisoned.into_inner()
    })
}
