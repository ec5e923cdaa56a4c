//! Animation support for the unfold button.
//!
//! This module provides the fixed spring curve and the transition primitive
//! that blends the widget's presentation between its folded and unfolded
//! geometry.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use unfold::widget::animation::{Spring, Transition};
//!
//! let mut fade = Transition::new(0.0_f32, 1.0, Spring::UNFOLD);
//! let start = Instant::now();
//! fade.sample(start);
//! let halfway = fade.sample(start + Duration::from_millis(250));
//! assert!(*halfway.value() > 0.5);
//! ```

mod spring;
mod transition;

pub use spring::Spring;
pub use transition::{Interpolate, Transition, TransitionState};
