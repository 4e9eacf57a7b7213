use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::error::{GenerationError, GenerationResult};

/// Cancellation and deadline handle passed through every generation call.
///
/// Clones share the same cancellation flag, so cancelling any clone cancels
/// all in-flight generation that received one.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child context sharing this context's flag, expiring after `timeout`
    /// or at the parent's deadline, whichever comes first. A timeout too large
    /// to represent leaves the parent's deadline in place.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.clone(),
        }
    }

    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };
        Self {
            cancelled: self.cancelled.clone(),
            deadline: Some(deadline),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns a cancellation error if generation should stop.
    pub fn check(&self) -> GenerationResult<()> {
        if self.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(GenerationError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
