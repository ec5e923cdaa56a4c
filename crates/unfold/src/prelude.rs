//! Prelude module for Unfold.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use unfold::prelude::*;
//! ```

// ============================================================================
// Content Model
// ============================================================================

pub use unfold_core::{ButtonContent, DisplayImage};
pub use unfold_macros::ButtonContent;

// ============================================================================
// Signals, Dispatch and Errors
// ============================================================================

pub use unfold_core::{CommandSender, ConnectionId, Result, Signal, UnfoldError};

// ============================================================================
// Configuration and Geometry
// ============================================================================

pub use crate::config::{ButtonSize, Palette, UnfoldConfig};
pub use crate::types::{Color, Point, Rect, Size};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::widgets::{
    ActiveLayout, Backdrop, ButtonVisual, HighlightVisual, UnfoldButton, UnfoldCommand,
    UnfoldState,
};
