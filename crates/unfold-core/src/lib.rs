//! Core systems for Unfold.
//!
//! This crate provides the foundational pieces the unfold button is built on:
//!
//! - **Content model**: [`ButtonContent`], the closed set of selectable items,
//!   and [`DisplayImage`], the template image drawn on each button
//! - **Signal/Slot System**: [`Signal`], type-safe observer notification
//! - **Dispatch**: [`dispatch::CommandQueue`], ordered delivery of work to the
//!   UI thread
//! - **Thread affinity**: [`thread_check::ThreadAffinity`], UI-thread assertions
//! - **Logging**: `tracing` targets, span names, [`PerfSpan`] and the
//!   `unfold_*!` macros
//!
//! # Signal Example
//!
//! ```
//! use unfold_core::Signal;
//!
//! let tapped = Signal::<Option<u8>>::new();
//! let conn_id = tapped.connect(|item| {
//!     println!("selection is now {:?}", item);
//! });
//!
//! tapped.emit(Some(2));
//! tapped.disconnect(conn_id);
//! ```

mod content;
pub mod dispatch;
mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use content::{ButtonContent, DisplayImage};
pub use dispatch::{CommandQueue, CommandSender};
pub use error::{Result, UnfoldError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;

// Re-exported so callers can build a `DisplayImage` without naming the
// `image` crate themselves.
pub use image;

#[doc(hidden)]
pub use tracing;
