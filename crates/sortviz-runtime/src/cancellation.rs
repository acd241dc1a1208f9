//! Cooperative cancellation for playback.
//!
//! A run's [`CancellationSource`] stays with whoever controls playback (a
//! reset button, a Ctrl-C handler); the [`CancellationToken`] goes to the
//! playback loop, which polls it before every step and sleeps on it between
//! steps so a cancel wakes it immediately.
//!
//! Cancelling is one-way. A new run gets a new source.
//!
//! # Example
//!
//! ```
//! use sortviz_runtime::CancellationSource;
//! use std::time::Duration;
//!
//! let source = CancellationSource::new();
//! let token = source.token();
//!
//! let player = std::thread::spawn(move || {
//!     let mut shown = 0;
//!     while !token.wait_timeout(Duration::from_millis(1)) {
//!         shown += 1;
//!     }
//!     shown
//! });
//!
//! source.cancel();
//! let _shown = player.join().unwrap();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};

use web_time::{Duration, Instant};

struct Signal {
    cancelled: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
}

impl Signal {
    fn is_set(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Control side of a cancellation signal.
///
/// Clones control the same signal. Dropping a source does not cancel.
#[derive(Clone)]
pub struct CancellationSource {
    signal: Arc<Signal>,
}

/// Observer side of a cancellation signal. Cheap to clone.
#[derive(Clone)]
pub struct CancellationToken {
    signal: Arc<Signal>,
}

impl CancellationSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            signal: Arc::new(Signal {
                cancelled: AtomicBool::new(false),
                lock: Mutex::new(()),
                wake: Condvar::new(),
            }),
        }
    }

    /// A token observing this source.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            signal: Arc::clone(&self.signal),
        }
    }

    /// Request cancellation and wake every sleeping token. Idempotent.
    pub fn cancel(&self) {
        self.signal.cancelled.store(true, Ordering::Release);
        let _guard = self.signal.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.signal.wake.notify_all();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.signal.is_set()
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancellationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationSource")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl CancellationToken {
    /// A token whose source has been dropped without cancelling. Never fires.
    #[must_use]
    pub fn never() -> Self {
        CancellationSource::new().token()
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.signal.is_set()
    }

    /// Sleep for `duration` or until cancelled, whichever comes first.
    ///
    /// Returns `true` if cancelled.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        if self.is_cancelled() {
            return true;
        }
        let start = Instant::now();
        let mut remaining = duration;
        let mut guard = self.signal.lock.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if self.is_cancelled() {
                return true;
            }
            let (next, result) = self
                .signal
                .wake
                .wait_timeout(guard, remaining)
                .unwrap_or_else(|e| e.into_inner());
            guard = next;
            if self.is_cancelled() {
                return true;
            }
            if result.timed_out() {
                return false;
            }
            // Spurious wakeup: sleep only for what is left.
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            remaining = duration - elapsed;
        }
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
