//! Thread affinity checks for UI-bound state.
//!
//! Widget state may only be touched from the thread that created it (the UI
//! thread). Objects record a [`ThreadAffinity`] at construction and assert it
//! on every mutation; work produced on other threads travels through
//! [`crate::dispatch`] instead.
//!
//! Checks are enabled by default in debug builds and disabled in release
//! builds; [`set_thread_checks_enabled`] overrides that globally.
//!
//! ```
//! use unfold_core::thread_check::ThreadAffinity;
//!
//! struct Counter {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn bump(&self) {
//!         self.affinity.debug_assert_same_thread();
//!         self.value.set(self.value.get() + 1);
//!     }
//! }
//!
//! let counter = Counter { affinity: ThreadAffinity::current(), value: Default::default() };
//! counter.bump();
//! assert_eq!(counter.value.get(), 1);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::ThreadId;

/// Flag to enable/disable runtime thread checks globally.
static THREAD_CHECKS_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Enable or disable runtime thread checks.
pub fn set_thread_checks_enabled(enabled: bool) {
    let previous = THREAD_CHECKS_ENABLED.swap(enabled, Ordering::SeqCst);
    if previous != enabled {
        crate::unfold_debug!(enabled, "thread checks toggled");
    }
}

/// Check if runtime thread checks are currently enabled.
#[inline]
pub fn are_thread_checks_enabled() -> bool {
    THREAD_CHECKS_ENABLED.load(Ordering::Relaxed)
}

/// Thread affinity tracker for objects.
///
/// Records the thread on which an object was created and verifies that
/// subsequent operations occur on the same thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create a new thread affinity tracker for the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// The thread this object belongs to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Whether the calling thread is the owning thread.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Panic if called from a thread other than the owning one.
    ///
    /// Does nothing while thread checks are disabled.
    #[track_caller]
    pub fn assert_same_thread(&self) {
        if are_thread_checks_enabled() && !self.is_same_thread() {
            panic_wrong_thread(self.thread_id);
        }
    }

    /// Like [`assert_same_thread`](Self::assert_same_thread), compiled out of
    /// release builds.
    #[inline]
    #[track_caller]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn panic_wrong_thread(owner: ThreadId) -> ! {
    let current = std::thread::current();
    panic!(
        "UI-affine state touched from thread \"{}\" ({:?}); it belongs to {:?}. \
         Post the operation through a CommandSender and drain it on the UI thread.",
        current.name().unwrap_or("<unnamed>"),
        current.id(),
        owner,
    )
}
