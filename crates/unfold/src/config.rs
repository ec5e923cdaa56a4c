//! Unfold button configuration.
//!
//! Configuration is plain data with serde support, so it can be embedded in
//! an application's own settings file or loaded from TOML text:
//!
//! ```
//! use unfold::config::{ButtonSize, UnfoldConfig};
//!
//! let config = UnfoldConfig::from_toml_str(
//!     r##"
//!     button_size = { width = 64, height = 48 }
//!
//!     [palette]
//!     highlight = "#FFCC00"
//!     "##,
//! )
//! .unwrap();
//!
//! assert_eq!(config.button_size, ButtonSize::Pair { width: 64.0, height: 48.0 });
//! assert_eq!(config.palette.highlight.to_string(), "#FFCC00");
//! ```

use serde::{Deserialize, Serialize};
use unfold_core::{Result, UnfoldError};

use crate::types::{Color, Size};

/// Default side length of a square button, in points.
pub const DEFAULT_BUTTON_SIDE: f32 = 55.0;

/// Size of every button in the row.
///
/// Either a single number (square buttons) or a `{ width, height }` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ButtonSize {
    /// Square buttons with the given side length.
    Scalar(f32),
    /// Buttons with independent width and height.
    Pair {
        /// Button width.
        width: f32,
        /// Button height.
        height: f32,
    },
}

impl ButtonSize {
    /// Resolve to a concrete size.
    pub fn size(&self) -> Size {
        match *self {
            ButtonSize::Scalar(side) => Size::square(side),
            ButtonSize::Pair { width, height } => Size::new(width, height),
        }
    }
}

impl Default for ButtonSize {
    fn default() -> Self {
        ButtonSize::Scalar(DEFAULT_BUTTON_SIDE)
    }
}

impl From<f32> for ButtonSize {
    fn from(side: f32) -> Self {
        ButtonSize::Scalar(side)
    }
}

impl From<Size> for ButtonSize {
    fn from(size: Size) -> Self {
        ButtonSize::Pair {
            width: size.width,
            height: size.height,
        }
    }
}

/// Colors used by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Tint of buttons that are not highlighted.
    pub button: Color,
    /// Tint of the selected button while the row is unfolded.
    pub highlight: Color,
    /// Color of the highlight marker behind the selected button.
    pub overlay: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            button: Color::WHITE,
            highlight: Color::YELLOW,
            overlay: Color::from_rgb(0.2, 0.2, 0.2),
        }
    }
}

/// Configuration consumed when the widget builds its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnfoldConfig {
    /// Size of each button; the widget's height equals the button height.
    pub button_size: ButtonSize,
    /// Tint and overlay colors.
    pub palette: Palette,
}

impl UnfoldConfig {
    /// Parse a configuration from TOML text.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| UnfoldError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| UnfoldError::Config(e.to_string()))
    }

    /// Builder-style setter for the button size.
    pub fn with_button_size(mut self, size: impl Into<ButtonSize>) -> Self {
        self.button_size = size.into();
        self
    }

    /// Builder-style setter for the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check that the button size is usable.
    pub fn validate(&self) -> Result<()> {
        let size = self.button_size.size();
        if !(size.width.is_finite() && size.height.is_finite()) || size.is_empty() {
            return Err(UnfoldError::Config(format!(
                "button size must be positive and finite, got {}x{}",
                size.width, size.height
            )));
        }
        Ok(())
    }
}
