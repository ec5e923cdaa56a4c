//! Widget implementations.

mod unfold_button;

pub use unfold_button::{
    ActiveLayout, Backdrop, ButtonVisual, HighlightVisual, UnfoldButton, UnfoldCommand,
    UnfoldState,
};
