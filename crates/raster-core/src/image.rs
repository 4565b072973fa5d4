//! Planar float image buffer.
//!
//! This module provides [`Image`], the owned raster container used by every
//! operation in the raster-rs ecosystem.
//!
//! # Memory Layout
//!
//! Samples are stored **channel-planar**, not interleaved: the buffer holds
//! all of channel 0 in row-major order (`w * h` samples), then all of
//! channel 1, and so on.
//!
//! ```text
//! Memory: [R R R R ...]  <- channel 0 plane (w*h samples)
//!         [G G G G ...]  <- channel 1 plane
//!         [B B B B ...]  <- channel 2 plane
//! ```
//!
//! # Addressing Policy
//!
//! - [`Image::get`] never fails: out-of-range x/y clamp to the nearest edge
//!   pixel (see [`crate::addressing`]).
//! - [`Image::set`] silently drops writes whose (x, y) is out of bounds.
//!
//! # Ownership
//!
//! An `Image` exclusively owns its buffer. [`Clone`] performs a deep copy
//! with a freshly allocated buffer; two images never share storage. Shape
//! (width, height, channels) is fixed at construction - operations that
//! change shape produce a new image.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::Image;
//!
//! let mut img = Image::new(4, 3, 3);
//! img.set(1, 2, 0, 0.75);
//! assert_eq!(img.get(1, 2, 0), 0.75);
//!
//! // Reads past the edge clamp to the nearest pixel
//! assert_eq!(img.get(100, 2, 0), img.get(3, 2, 0));
//!
//! // Writes past the edge are dropped
//! img.set(-1, 0, 0, 9.0);
//! assert_eq!(img.get(0, 0, 0), 0.0);
//! ```
//!
//! # Used By
//!
//! - `raster-ops` - per-pixel transforms, color conversion, resampling

use crate::addressing::plane_offset;
use crate::{Error, Result};

/// Owned planar float image buffer.
///
/// Stores `width * height * channels` `f32` samples in channel-planar
/// layout. See the [module docs](self) for layout and addressing details.
///
/// # Example
///
/// ```rust
/// use raster_core::Image;
///
/// let img = Image::filled(8, 8, 3, 0.5);
/// assert_eq!(img.dimensions(), (8, 8));
/// assert_eq!(img.channels(), 3);
/// assert_eq!(img.get(4, 4, 2), 0.5);
/// ```
#[derive(Clone)]
pub struct Image {
    /// Sample data, channel-planar. Length is always `width * height * channels`.
    data: Vec<f32>,
    /// Image width in pixels
    width: usize,
    /// Image height in pixels
    height: usize,
    /// Channels per pixel
    channels: usize,
}

impl Image {
    /// Creates a new image filled with zeros.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Image;
    ///
    /// let img = Image::new(1920, 1080, 3);
    /// assert_eq!(img.width(), 1920);
    /// assert_eq!(img.get(0, 0, 0), 0.0);
    /// ```
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: vec![0.0; width * height * channels],
            width,
            height,
            channels,
        }
    }

    /// Creates an image with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: f32) -> Self {
        Self {
            data: vec![value; width * height * channels],
            width,
            height,
            channels,
        }
    }

    /// Creates an image from an existing channel-planar sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` is not exactly
    /// `width * height * channels` samples long.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Image;
    ///
    /// let img = Image::from_data(2, 2, 1, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(img.get(1, 1, 0), 3.0);
    ///
    /// assert!(Image::from_data(2, 2, 1, vec![0.0; 3]).is_err());
    /// ```
    pub fn from_data(width: usize, height: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                channels,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns `true` if the image holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw channel-planar sample buffer.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the raw sample buffer mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns the plane of channel `c` as a row-major slice.
    ///
    /// # Panics
    ///
    /// Panics if `c >= self.channels()`.
    #[inline]
    pub fn plane(&self, c: usize) -> &[f32] {
        let len = self.width * self.height;
        &self.data[c * len..(c + 1) * len]
    }

    /// Returns the plane of channel `c` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `c >= self.channels()`.
    #[inline]
    pub fn plane_mut(&mut self, c: usize) -> &mut [f32] {
        let len = self.width * self.height;
        &mut self.data[c * len..(c + 1) * len]
    }

    /// Sets every sample to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Returns the sample at (x, y) in channel `c`, clamping to the edge.
    ///
    /// Never fails: coordinates outside `[0, w)`/`[0, h)` read the nearest
    /// edge pixel, no matter how far out of range they are. The channel
    /// index is **not** clamped - a valid `c` is a caller precondition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Image;
    ///
    /// let img = Image::from_data(2, 1, 1, vec![0.25, 0.75]).unwrap();
    /// assert_eq!(img.get(1, 0, 0), 0.75);
    /// assert_eq!(img.get(50, -3, 0), 0.75); // clamps to (1, 0)
    /// ```
    #[inline]
    pub fn get(&self, x: i32, y: i32, c: usize) -> f32 {
        debug_assert!(c < self.channels, "channel {} out of range", c);
        self.data[plane_offset(x, y, c, self.width, self.height)]
    }

    /// Writes `v` at (x, y) in channel `c` if the coordinate is in bounds.
    ///
    /// Out-of-bounds (x, y) makes the write a silent no-op - the coordinate
    /// is rejected, not clamped. In-bounds writes overwrite unconditionally
    /// and never clamp the value.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, c: usize, v: f32) {
        debug_assert!(c < self.channels, "channel {} out of range", c);
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        self.data[plane_offset(x, y, c, self.width, self.height)] = v;
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}
