//! Coordinate clamping and planar buffer addressing.
//!
//! Every pixel read in the raster-rs ecosystem goes through this module.
//! The addressing policy is **clamp-to-edge**: out-of-range x/y coordinates
//! are silently redirected to the nearest edge pixel instead of erroring.
//! Resampling relies on this for boundary pixels, so the behavior here is
//! load-bearing and must not grow bounds checks or logging.
//!
//! # Functions
//!
//! - [`clamp_int`] - Half-open `[lo, hi)` coordinate clamping
//! - [`clamp_float`] - Closed `[lo, hi]` value clamping
//! - [`plane_offset`] - Flat offset into a channel-planar buffer
//!
//! # Used By
//!
//! - [`crate::image::Image`] - `get`/`set` accessors
//! - `raster-ops` - range clamping of color samples

/// Clamps an integer to the half-open interval `[lo, hi)`.
///
/// Values below `lo` map to `lo`; values at or above `hi` map to `hi - 1`.
/// This is coordinate clamping: `hi` is a dimension, so the largest valid
/// index is `hi - 1`.
///
/// # Example
///
/// ```rust
/// use raster_core::addressing::clamp_int;
///
/// assert_eq!(clamp_int(-3, 0, 10), 0);
/// assert_eq!(clamp_int(4, 0, 10), 4);
/// assert_eq!(clamp_int(10, 0, 10), 9);
/// ```
#[inline]
pub fn clamp_int(val: i32, lo: i32, hi: i32) -> i32 {
    let low = if val < lo { lo } else { val };
    if low >= hi { hi - 1 } else { low }
}

/// Clamps a float to the closed interval `[lo, hi]`.
///
/// Unlike [`clamp_int`], both endpoints are inclusive. This is value
/// clamping, used to confine color samples to a range such as `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use raster_core::addressing::clamp_float;
///
/// assert_eq!(clamp_float(-0.25, 0.0, 1.0), 0.0);
/// assert_eq!(clamp_float(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp_float(1.0, 0.0, 1.0), 1.0);
/// assert_eq!(clamp_float(7.0, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp_float(val: f32, lo: f32, hi: f32) -> f32 {
    let low = if val < lo { lo } else { val };
    if low > hi { hi } else { low }
}

/// Computes the flat offset of sample (x, y, c) in a channel-planar buffer.
///
/// The buffer holds all of channel 0 (row-major, `w * h` samples), then all
/// of channel 1, and so on. Out-of-range x/y are clamped to the nearest edge
/// coordinate; `c` is **not** clamped and must be a valid channel index.
///
/// # Example
///
/// ```rust
/// use raster_core::addressing::plane_offset;
///
/// // 4x3 image: pixel (1, 2) of channel 1 lives after the 12-sample
/// // channel-0 plane.
/// assert_eq!(plane_offset(1, 2, 1, 4, 3), 1 + 2 * 4 + 1 * 12);
///
/// // Coordinates past the edge redirect to the edge pixel.
/// assert_eq!(plane_offset(99, -5, 0, 4, 3), plane_offset(3, 0, 0, 4, 3));
/// ```
#[inline]
pub fn plane_offset(x: i32, y: i32, c: usize, w: usize, h: usize) -> usize {
    let x = clamp_int(x, 0, w as i32) as usize;
    let y = clamp_int(y, 0, h as i32) as usize;
    x + y * w + c * w * h
}
