//! Error types for raster-core operations.
//!
//! Only buffer *construction* is fallible here. Contract violations in
//! processing code (wrong channel count for an operation, mismatched
//! pipeline dimensions) are fatal by design and panic via `assert!` at the
//! call site instead of returning an error: producing silently wrong pixels
//! is never acceptable. Out-of-range coordinate access is not an error at
//! all - reads clamp to the edge and writes are dropped.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing raster buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length doesn't match the requested image shape.
    ///
    /// Returned by [`crate::image::Image::from_data`] when the supplied
    /// sample vector is not exactly `width * height * channels` long.
    #[error("invalid dimensions {width}x{height}x{channels}: {reason}")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Requested channel count
        channels: usize,
        /// Reason why the shape is invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        width: usize,
        height: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }
}
