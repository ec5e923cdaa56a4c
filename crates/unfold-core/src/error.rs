//! Error types for Unfold.

use thiserror::Error;

/// The main error type for Unfold operations.
#[derive(Error, Debug)]
pub enum UnfoldError {
    /// The content type enumerates no values, so nothing can be selected.
    #[error("content type `{type_name}` has no values")]
    EmptyContent {
        /// Name of the offending content type.
        type_name: &'static str,
    },

    /// An item was referenced that is not part of the current item universe.
    #[error("item with index {index} is not part of the usable items")]
    UnknownItem {
        /// The item's index.
        index: i64,
    },

    /// A button tag did not map back to any content value.
    #[error("tag {0} does not correspond to any content value")]
    InvalidTag(i64),

    /// An image could not be decoded.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A command could not be delivered to the UI thread.
    #[error("command queue has been closed")]
    QueueClosed,
}

/// A specialized Result type for Unfold operations.
pub type Result<T> = std::result::Result<T, UnfoldError>;
