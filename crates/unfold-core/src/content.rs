//! The content model: the closed set of choices an unfold button offers.
//!
//! A content type is usually a field-less enum. It has to be enumerable (so
//! the widget can build one button per value), hashable (values key the
//! button map), totally ordered, and recoverable from the integer tag stored
//! on each button.
//!
//! # Example
//!
//! ```
//! use unfold_core::{ButtonContent, DisplayImage};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
//! enum Flash {
//!     Auto,
//!     On,
//!     Off,
//! }
//!
//! impl ButtonContent for Flash {
//!     fn all_values() -> Vec<Self> {
//!         vec![Flash::Auto, Flash::On, Flash::Off]
//!     }
//!
//!     fn index(&self) -> i64 {
//!         *self as i64
//!     }
//!
//!     fn from_index(index: i64) -> Option<Self> {
//!         Self::all_values().into_iter().find(|v| v.index() == index)
//!     }
//! }
//!
//! assert_eq!(Flash::from_index(Flash::Off.index()), Some(Flash::Off));
//! assert!(Flash::On.display_image().is_none());
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use image::{Rgba, RgbaImage};

/// A selectable item of an unfold button.
///
/// Implementations must keep `index` unique and stable across the lifetime
/// of the program: it is stored as the button tag and mapped back through
/// [`from_index`](Self::from_index) when the button is tapped.
pub trait ButtonContent: Copy + Eq + Hash + Ord + fmt::Debug + Send + Sync + 'static {
    /// Every valid value, in display order.
    fn all_values() -> Vec<Self>;

    /// The stable integer tag of this value.
    fn index(&self) -> i64;

    /// Recover a value from its tag.
    ///
    /// Returns `None` for tags that no value carries.
    fn from_index(index: i64) -> Option<Self>;

    /// The image drawn on this value's button.
    fn display_image(&self) -> Option<DisplayImage> {
        None
    }
}

/// A shared, immutable image shown on a button.
///
/// Images are rendered in template mode: only their alpha channel matters,
/// the colour comes from the button's current tint (see [`tinted`](Self::tinted)).
#[derive(Clone)]
pub struct DisplayImage {
    pixels: Arc<RgbaImage>,
}

impl DisplayImage {
    /// Wrap an already-decoded image.
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Decode an image from encoded bytes (any format enabled on the `image` crate).
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        let decoded = image::load_from_memory(bytes).inspect_err(|error| {
            crate::unfold_warn!(%error, len = bytes.len(), "display image failed to decode");
        })?;
        let pixels = decoded.to_rgba8();
        crate::unfold_trace!(
            width = pixels.width(),
            height = pixels.height(),
            "display image decoded"
        );
        Ok(Self::new(pixels))
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The source pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Render the template with a tint.
    ///
    /// Every output pixel takes the tint's colour; its alpha is the source
    /// alpha scaled by the tint alpha. Components are 8-bit straight alpha.
    pub fn tinted(&self, tint: [u8; 4]) -> RgbaImage {
        let [r, g, b, a] = tint;
        let mut out = RgbaImage::new(self.width(), self.height());
        for (x, y, src) in self.pixels.enumerate_pixels() {
            let alpha = (u16::from(src[3]) * u16::from(a) / 255) as u8;
            out.put_pixel(x, y, Rgba([r, g, b, alpha]));
        }
        out
    }

    /// Whether two handles share the same pixel storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for DisplayImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
