//! Progress reporting for archive writing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives progress while page images are copied into an archive.
///
/// For each conversion, [`set_total`](Self::set_total) is called exactly once
/// with the number of images to copy, before any call to
/// [`increment`](Self::increment).
/// One unit is reported per copied image.
///
/// Implementations must tolerate calls from several conversions
/// running concurrently on different threads.
pub trait ProgressSink: Send + Sync {
    /// Sets the number of units expected for a conversion.
    fn set_total(&self, total: usize);

    /// Reports `amount` completed units.
    fn increment(&self, amount: usize);
}

/// A [`ProgressSink`] that discards all progress.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn set_total(&self, _total: usize) {}

    fn increment(&self, _amount: usize) {}
}

/// A shared, thread-safe progress counter.
///
/// Clones share the same counts, so one counter may be handed to
/// several conversions running concurrently.
/// Totals accumulate across those conversions just as completed units do.
///
/// # Examples
/// ```
/// use pagepub::{ProgressCounter, ProgressSink};
///
/// let counter = ProgressCounter::new();
/// let shared = counter.clone();
///
/// shared.set_total(3);
/// shared.increment(1);
///
/// assert_eq!(3, counter.total());
/// assert_eq!(1, counter.completed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProgressCounter(Arc<Counts>);

#[derive(Debug, Default)]
struct Counts {
    total: AtomicUsize,
    completed: AtomicUsize,
}

impl ProgressCounter {
    /// Creates a counter with a total and completed count of `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sum of every reported total.
    pub fn total(&self) -> usize {
        self.0.total.load(Ordering::Acquire)
    }

    /// The number of completed units reported so far.
    pub fn completed(&self) -> usize {
        self.0.completed.load(Ordering::Acquire)
    }
}

impl ProgressSink for ProgressCounter {
    fn set_total(&self, total: usize) {
        self.0.total.fetch_add(total, Ordering::AcqRel);
    }

    fn increment(&self, amount: usize) {
        self.0.completed.fetch_add(amount, Ordering::AcqRel);
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for &T {
    fn set_total(&self, total: usize) {
        (**self).set_total(total)
    }

    fn increment(&self, amount: usize) {
        (**self).increment(amount)
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for Arc<T> {
    fn set_total(&self, total: usize) {
        (**self).set_total(total)
    }

    fn increment(&self, amount: usize) {
        (**self).increment(amount)
    }
}
