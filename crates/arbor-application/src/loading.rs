//! Loading indicator shared by the controllers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts in-flight requests; the indicator is visible while any is pending.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request as started. The request counts as finished when the
    /// returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Keeps the indicator visible until dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_toggles_indicator() {
        let loading = LoadingIndicator::new();
        assert!(!loading.is_loading());

        let guard = loading.begin();
        assert!(loading.is_loading());

        drop(guard);
        assert!(!loading.is_loading());
    }

    #[test]
    fn test_overlapping_requests() {
        let loading = LoadingIndicator::new();
        let shared = loading.clone();

        let first = loading.begin();
        let second = shared.begin();
        assert_eq!(loading.in_flight(), 2);

        drop(first);
        assert!(shared.is_loading());
        drop(second);
        assert!(!shared.is_loading());
    }
}
