//! # raster-ops
//!
//! Per-pixel transforms, color conversion and resampling for planar float
//! images.
//!
//! # Modules
//!
//! - [`pipeline`] - Generic per-pixel transformation driver
//! - [`channel`] - Grayscale, channel shift/scale, range clamp
//! - [`hsv`] - RGB <-> HSV conversion
//! - [`resize`] - Nearest-neighbor and bilinear resampling
//! - [`parallel`] - Rayon-parallel resampling (feature `parallel`)
//!
//! # Error Model
//!
//! Contract violations - an operation that requires 3 channels handed
//! something else, pipeline input/output of different sizes - are fatal:
//! operations panic instead of producing silently wrong pixels. Out-of-range
//! coordinates are *not* errors anywhere in this crate; reads edge-clamp and
//! writes drop, and resampling depends on exactly that behavior at image
//! boundaries.
//!
//! # Example
//!
//! ```rust
//! use raster_core::Image;
//! use raster_ops::{bilinear_resize, clamp_image, rgb_to_grayscale, shift_image};
//!
//! let mut img = Image::filled(16, 16, 3, 0.4);
//! shift_image(&mut img, 2, 0.8);
//! clamp_image(&mut img);
//! let thumb = bilinear_resize(&img, 8, 8);
//! let gray = rgb_to_grayscale(&thumb);
//! assert_eq!(gray.dimensions(), (8, 8));
//! assert_eq!(gray.channels(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod hsv;
pub mod pipeline;
pub mod resize;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use channel::{
    clamp_image, rgb_to_grayscale, scale_image, shift_image, ChannelScale, ChannelShift,
    Grayscale, RangeClamp,
};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, HsvToRgb, RgbToHsv};
pub use pipeline::{apply_transform, apply_transform_in_place, PixelTransform};
pub use resize::{bilinear_resize, nn_resize, resize, Interpolation};
