//! Tail-convergence counter shared between benchmark copies.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Count of copies still inside their measured iterations.
///
/// Initialized to the copy count. Every worker decrements it exactly
/// once when its measured work is done, then keeps running unmeasured
/// iterations until the counter reads zero, so early finishers do not
/// relax the CPU contention their siblings are measured under.
/// Cloning shares the underlying counter.
///
/// # Example
/// ```
/// use db12_core::TailCounter;
///
/// let counter = TailCounter::new(2);
/// assert!(!counter.all_done());
///
/// counter.mark_measured_done();
/// counter.mark_measured_done();
/// assert!(counter.all_done());
/// ```
#[derive(Clone)]
pub struct TailCounter {
    remaining: Arc<AtomicUsize>,
}

impl TailCounter {
    /// Create a counter for the given number of copies.
    #[must_use]
    pub fn new(copies: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(copies)),
        }
    }

    /// Signal that this copy finished its measured iterations.
    ///
    /// Saturates at zero: the counter never goes negative even if
    /// decremented more times than it was initialized with.
    pub fn mark_measured_done(&self) {
        let _ = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| v.checked_sub(1));
    }

    /// Whether every copy has finished its measured iterations.
    #[must_use]
    pub fn all_done(&self) -> bool {
        self.remaining.load(Ordering::Acquire) == 0
    }

    /// Number of copies still measuring.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Handle that guarantees this copy's measured-done signal is sent
    /// exactly once, releasing the counter on drop if the copy bails
    /// out before reaching its measured boundary.
    #[must_use]
    pub fn guard(&self) -> TailGuard {
        TailGuard {
            counter: self.clone(),
            done: false,
        }
    }
}

/// Exactly-once measured-done signal for one benchmark copy.
///
/// A copy that fails mid-run must still decrement the shared counter,
/// or every sibling in its tail phase spins forever waiting for it.
pub struct TailGuard {
    counter: TailCounter,
    done: bool,
}

impl TailGuard {
    /// Signal that this copy finished its measured iterations. Further
    /// calls (and the eventual drop) are no-ops.
    pub fn mark_measured_done(&mut self) {
        if !self.done {
            self.done = true;
            self.counter.mark_measured_done();
        }
    }
}

impl Drop for TailGuard {
    fn drop(&mut self) {
        self.mark_measured_done();
    }
}
