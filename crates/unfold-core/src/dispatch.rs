//! Deferred delivery of work to the UI thread.
//!
//! UI state is single-threaded: layout mutation and animation must run on the
//! thread that owns the widget. Code running elsewhere (input backends,
//! background tasks, other threads) posts commands through a cloneable
//! [`CommandSender`]; the UI thread drains the matching [`CommandQueue`] at a
//! point of its choosing, typically once per frame.
//!
//! Commands are delivered in the order they were posted. Posting never blocks.
//!
//! # Example
//!
//! ```
//! use unfold_core::dispatch::CommandQueue;
//!
//! let mut queue = CommandQueue::<u32>::new();
//! let sender = queue.sender();
//!
//! std::thread::spawn(move || {
//!     sender.post(1).unwrap();
//!     sender.post(2).unwrap();
//! })
//! .join()
//! .unwrap();
//!
//! let mut seen = Vec::new();
//! let handled = queue.drain(|command| seen.push(command));
//! assert_eq!(handled, 2);
//! assert_eq!(seen, vec![1, 2]);
//! ```

use std::fmt;

use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};

use crate::error::{Result, UnfoldError};
use crate::logging::{span_names, targets};
use crate::thread_check::ThreadAffinity;

/// The sending half of a [`CommandQueue`].
///
/// Senders are cheap to clone and may be moved to any thread.
pub struct CommandSender<C> {
    tx: Sender<C>,
}

impl<C> Clone for CommandSender<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<C> fmt::Debug for CommandSender<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSender")
            .field("pending", &self.tx.len())
            .finish()
    }
}

impl<C> CommandSender<C> {
    /// Post a command for the UI thread.
    ///
    /// Fails with [`UnfoldError::QueueClosed`] once the queue has been dropped.
    pub fn post(&self, command: C) -> Result<()> {
        self.tx.send(command).map_err(|_| {
            tracing::debug!(target: targets::DISPATCH, "command posted to a dropped queue");
            UnfoldError::QueueClosed
        })
    }
}

/// The UI-thread end of a command channel.
///
/// The queue is bound to the thread that created it; draining from any other
/// thread trips the thread-affinity check.
pub struct CommandQueue<C> {
    tx: Sender<C>,
    rx: Receiver<C>,
    affinity: ThreadAffinity,
    batch_size: usize,
}

impl<C> fmt::Debug for CommandQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandQueue")
            .field("pending", &self.rx.len())
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl<C> Default for CommandQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CommandQueue<C> {
    /// Create a new queue owned by the current thread.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            affinity: ThreadAffinity::current(),
            batch_size: usize::MAX,
        }
    }

    /// Create a queue that handles at most `batch_size` commands per drain.
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            ..Self::new()
        }
    }

    /// Get a new sender for this queue.
    pub fn sender(&self) -> CommandSender<C> {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    /// Check if there are any pending commands.
    pub fn has_pending(&self) -> bool {
        !self.rx.is_empty()
    }

    /// Get the number of pending commands.
    pub fn pending_count(&self) -> usize {
        self.rx.len()
    }

    /// Handle pending commands in posting order, up to the batch size.
    ///
    /// Commands posted by `handler` itself are handled in the same drain as
    /// long as the batch size allows. Returns the number of commands handled.
    pub fn drain<F>(&mut self, mut handler: F) -> usize
    where
        F: FnMut(C),
    {
        self.affinity.debug_assert_same_thread();
        let _span =
            tracing::trace_span!(target: targets::DISPATCH, "drain", operation = span_names::DISPATCH)
                .entered();

        let mut handled = 0;
        while handled < self.batch_size {
            match self.rx.try_recv() {
                Ok(command) => {
                    handler(command);
                    handled += 1;
                }
                Err(TryRecvError::Empty) => break,
                // We hold a sender ourselves, so the channel cannot disconnect.
                Err(TryRecvError::Disconnected) => break,
            }
        }

        if handled > 0 {
            tracing::trace!(target: targets::DISPATCH, handled, "drained commands");
        }
        handled
    }
}
