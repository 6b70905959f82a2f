//! Shared in-flight request tracking.
//!
//! One [`ActivityCounter`] lives for the whole session and is handed (behind
//! an `Arc`) to every call site that performs tracked asynchronous work. The
//! derived busy flag drives a single loading indicator without each call site
//! managing overlap manually.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

/// Counts outstanding operations and exposes a derived busy flag.
///
/// The count never goes negative: a release with no matching acquire is a
/// no-op, not an error. The count mutation and the transition check happen
/// under one lock, so interleaved acquire/release calls never expose a
/// transient wrong value to subscribers.
#[derive(Debug)]
pub struct ActivityCounter {
    pending: Mutex<u64>,
    busy_tx: watch::Sender<bool>,
}

impl ActivityCounter {
    pub fn new() -> Self {
        let (busy_tx, _) = watch::channel(false);
        ActivityCounter {
            pending: Mutex::new(0),
            busy_tx,
        }
    }

    /// Mark one operation as started.
    ///
    /// Emits `busy = true` on the 0 -> 1 transition.
    pub fn acquire(&self) {
        let mut pending = self.pending.lock().expect("activity counter lock poisoned");
        *pending += 1;
        if *pending == 1 {
            self.busy_tx.send_replace(true);
        }
    }

    /// Mark one operation as settled.
    ///
    /// Clamped at zero: releasing while idle changes nothing and emits no
    /// spurious transition. Emits `busy = false` when the last outstanding
    /// operation settles.
    pub fn release(&self) {
        let mut pending = self.pending.lock().expect("activity counter lock poisoned");
        if *pending == 0 {
            return;
        }
        *pending -= 1;
        if *pending == 0 {
            self.busy_tx.send_replace(false);
        }
    }

    /// Current busy flag.
    pub fn is_busy(&self) -> bool {
        *self.busy_tx.borrow()
    }

    /// Number of outstanding operations.
    pub fn pending(&self) -> u64 {
        *self.pending.lock().expect("activity counter lock poisoned")
    }

    /// Subscribe to busy transitions.
    ///
    /// The receiver's first poll yields the current value immediately; later
    /// polls yield each transition in the order it happened. Subscribers are
    /// independent of each other.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        let mut busy_rx = self.busy_tx.subscribe();
        busy_rx.mark_changed();
        busy_rx
    }

    /// Scoped acquisition: the returned guard releases on drop, so the busy
    /// flag clears on every exit path, including errors.
    pub fn track(self: &Arc<Self>) -> ActivityGuard {
        self.acquire();
        ActivityGuard {
            counter: Arc::clone(self),
        }
    }
}

impl Default for ActivityCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases its counter when dropped.
#[derive(Debug)]
pub struct ActivityGuard {
    counter: Arc<ActivityCounter>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        self.counter.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_follows_acquire_release_sequence() {
        let counter = ActivityCounter::new();
        assert!(!counter.is_busy());

        counter.acquire();
        counter.acquire();
        assert!(counter.is_busy());

        counter.release();
        assert!(counter.is_busy());

        counter.release();
        assert!(!counter.is_busy());
        assert_eq!(counter.pending(), 0);
    }

    #[test]
    fn test_release_without_acquire_is_a_noop() {
        let counter = ActivityCounter::new();
        counter.release();
        counter.release();
        assert!(!counter.is_busy());
        assert_eq!(counter.pending(), 0);

        // The clamp must not leave a deficit behind
        counter.acquire();
        assert!(counter.is_busy());
        assert_eq!(counter.pending(), 1);
    }

    #[test]
    fn test_subscriber_sees_current_value_immediately() {
        let counter = ActivityCounter::new();
        counter.acquire();
        counter.acquire();

        // Subscribing after the transition still yields the current value
        // without requiring a further state change
        let mut busy_rx = counter.subscribe();
        assert!(busy_rx.has_changed().unwrap());
        assert!(*busy_rx.borrow_and_update());
    }

    #[tokio::test]
    async fn test_subscriber_observes_transition() {
        let counter = Arc::new(ActivityCounter::new());
        let mut busy_rx = counter.subscribe();

        busy_rx.changed().await.unwrap();
        assert!(!*busy_rx.borrow_and_update());

        counter.acquire();
        busy_rx.changed().await.unwrap();
        assert!(*busy_rx.borrow_and_update());

        counter.release();
        busy_rx.changed().await.unwrap();
        assert!(!*busy_rx.borrow_and_update());
    }

    #[test]
    fn test_guard_releases_on_error_path() {
        let counter = Arc::new(ActivityCounter::new());

        fn failing_operation(counter: &Arc<ActivityCounter>) -> Result<(), String> {
            let _busy = counter.track();
            Err("backend unreachable".to_string())
        }

        assert!(failing_operation(&counter).is_err());
        assert!(!counter.is_busy());
        assert_eq!(counter.pending(), 0);
    }

    #[test]
    fn test_interleaved_acquires_from_threads_settle_to_idle() {
        let counter = Arc::new(ActivityCounter::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let _busy = counter.track();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.pending(), 0);
        assert!(!counter.is_busy());
    }
}
