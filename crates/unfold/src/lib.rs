//! Unfold - an animated row of buttons that folds into its selected button.
//!
//! This is the main crate that re-exports the core APIs and provides the
//! widget, its layout engine and its animation.
//!
//! # Example
//!
//! ```
//! use unfold::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ButtonContent)]
//! enum Flash {
//!     Auto,
//!     On,
//!     Off,
//! }
//!
//! let config = UnfoldConfig::default().with_button_size(44.0);
//! let mut flash = UnfoldButton::<Flash>::new(config)?;
//! flash.selection_changed.connect(|picked| {
//!     if let Some(mode) = picked {
//!         println!("flash mode: {mode:?}");
//!     }
//! });
//!
//! flash.tap(Flash::Auto.index());
//! flash.finish_animation();
//! assert_eq!(flash.frame().width(), 3.0 * 44.0);
//! # Ok::<(), unfold::UnfoldError>(())
//! ```

pub use unfold_core::*;
pub use unfold_macros::*;

pub mod config;
pub mod prelude;
pub mod types;
pub mod widget;
