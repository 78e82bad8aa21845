//! Cooperative stop conditions checked between iterations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// External cancellation flag plus an optional wall-clock deadline.
///
/// Runners poll [`should_stop`](Self::should_stop) only between whole
/// iterations (or generations), so a stop never splits one round's work.
#[derive(Debug, Clone, Default)]
pub struct StopCondition {
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl StopCondition {
    /// Builds a stop condition starting its clock now.
    pub fn new(cancel: Option<Arc<AtomicBool>>, time_limit_ms: Option<u64>) -> Self {
        Self {
            cancel,
            deadline: time_limit_ms.map(|ms| Instant::now() + Duration::from_millis(ms)),
        }
    }

    /// Never stops.
    pub fn none() -> Self {
        Self::default()
    }

    /// `true` once the flag is raised or the deadline has passed.
    pub fn should_stop(&self) -> bool {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
