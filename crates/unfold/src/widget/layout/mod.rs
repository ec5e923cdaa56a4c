//! Constraint-based layout for the unfold button.
//!
//! The widget keeps two [`ConstraintSet`]s: the folded ("close") set, where
//! only the selected button is visible, and the unfolded ("open") set, where
//! all buttons sit side by side. [`build_close`] and [`build_open`] derive
//! them from the item universe, and [`resolve`] turns whichever set is active
//! into frames.
//!
//! # Example
//!
//! ```
//! use unfold::types::{Point, Size};
//! use unfold::widget::layout::{build_open, resolve};
//!
//! let items = [1_i64, 2, 3];
//! let open = build_open(&items, 2, 0.0);
//! let frames = resolve(&open, &items, Point::ZERO, Size::square(40.0));
//!
//! assert_eq!(frames.container.width(), 120.0);
//! assert_eq!(frames.frame(&3).map(|f| f.left()), Some(80.0));
//! ```

mod builder;
mod constraint;
mod resolve;

pub use builder::{build_close, build_open};
pub use constraint::{Anchor, Constraint, ConstraintSet, Edge, Element};
pub use resolve::{LayoutFrames, resolve};
