//! Logging facilities for Unfold.
//!
//! Unfold uses the `tracing` crate for instrumentation. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("unfold=debug,unfold_core=info")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Unfold for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Constraint set construction.
    pub const LAYOUT_BUILD: &str = "unfold::layout::build";
    /// Constraint resolution into frames.
    pub const LAYOUT_RESOLVE: &str = "unfold::layout::resolve";
    /// Resolving the active layout and starting or snapping to it.
    pub const LAYOUT_APPLY: &str = "unfold::layout::apply";
    /// Animation frame processing.
    pub const ANIMATION_TICK: &str = "unfold::animation::tick";
    /// Draining queued commands on the UI thread.
    pub const DISPATCH: &str = "unfold::dispatch";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target, used by the `unfold_*!` macros.
    pub const CORE: &str = "unfold_core";
    /// Timing spans opened by [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "unfold::perf";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "unfold_core::signal";
    /// Command dispatch target.
    pub const DISPATCH: &str = "unfold_core::dispatch";
    /// Constraint building and resolution.
    pub const LAYOUT: &str = "unfold::layout";
    /// Spring animation.
    pub const ANIMATION: &str = "unfold::animation";
    /// Widget state machine.
    pub const WIDGET: &str = "unfold::widget";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` crate macros with consistent
/// target naming. They resolve `tracing` through this crate, so callers need
/// no direct dependency on it.
#[macro_export]
macro_rules! unfold_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! unfold_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! unfold_info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! unfold_warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! unfold_error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
