//! The unfold button and the machinery behind it.
//!
//! - [`widgets::UnfoldButton`]: the widget and its state machine
//! - [`layout`]: the folded and unfolded constraint sets and their resolver
//! - [`animation`]: the spring transition between the two
//!
//! Layout and animation are pure building blocks; only the widget holds
//! state.

pub mod animation;
pub mod layout;
pub mod widgets;
