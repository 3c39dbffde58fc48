use jiff::Timestamp;
use std::sync::{Arc, Mutex, PoisonError};

/// Clock used for record timestamps.
///
/// The default follows the system clock. Tests and the dev server pin it so
/// seeded data is reproducible.
#[derive(Clone, Default)]
pub struct TimeSource {
    pinned: Option<Arc<Mutex<Timestamp>>>,
}

impl TimeSource {
    pub fn pinned(initial_time: Timestamp) -> Self {
        Self {
            pinned: Some(Arc::new(Mutex::new(initial_time))),
        }
    }

    pub fn now(&self) -> Timestamp {
        match &self.pinned {
            Some(time) => *time.lock().unwrap_or_else(PoisonError::into_inner),
            None => Timestamp::now(),
        }
    }

    /// Move a pinned clock. Has no effect on the system clock.
    pub fn set(&self, time: Timestamp) {
        if let Some(pinned) = &self.pinned {
            *pinned.lock().unwrap_or_else(PoisonError::into_inner) = time;
        }
    }
}
