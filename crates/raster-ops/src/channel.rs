//! Channel operations: grayscale, shift, scale, range clamp.
//!
//! All four are instances of the per-pixel pipeline. Every operation here
//! requires a 3-channel image; violating that is a contract violation and
//! panics rather than producing wrong pixels.
//!
//! # Example
//!
//! ```rust
//! use raster_core::Image;
//! use raster_ops::channel::{rgb_to_grayscale, shift_image};
//!
//! let mut img = Image::filled(4, 4, 3, 0.5);
//! shift_image(&mut img, 0, 0.2);
//! let gray = rgb_to_grayscale(&img);
//! assert_eq!(gray.channels(), 1);
//! ```

use crate::pipeline::{apply_transform, apply_transform_in_place, PixelTransform};
use raster_core::{clamp_float, luminance_bt601, Image};

/// BT.601 grayscale reduction: 3 channels in, 1 channel out.
#[derive(Debug, Clone, Copy)]
pub struct Grayscale;

impl PixelTransform for Grayscale {
    fn in_channels(&self) -> usize {
        3
    }
    fn out_channels(&self) -> usize {
        1
    }
    fn apply(&self, input: &[f32], output: &mut [f32]) {
        output[0] = luminance_bt601([input[0], input[1], input[2]]);
    }
}

/// Adds a constant to one channel, passing the others through.
#[derive(Debug, Clone, Copy)]
pub struct ChannelShift {
    /// Channel to shift (0..3).
    pub channel: usize,
    /// Amount added to every sample of that channel.
    pub delta: f32,
}

impl PixelTransform for ChannelShift {
    fn in_channels(&self) -> usize {
        3
    }
    fn out_channels(&self) -> usize {
        3
    }
    fn apply(&self, input: &[f32], output: &mut [f32]) {
        output.copy_from_slice(input);
        output[self.channel] += self.delta;
    }
}

/// Multiplies one channel by a constant, passing the others through.
#[derive(Debug, Clone, Copy)]
pub struct ChannelScale {
    /// Channel to scale (0..3).
    pub channel: usize,
    /// Factor applied to every sample of that channel.
    pub factor: f32,
}

impl PixelTransform for ChannelScale {
    fn in_channels(&self) -> usize {
        3
    }
    fn out_channels(&self) -> usize {
        3
    }
    fn apply(&self, input: &[f32], output: &mut [f32]) {
        output.copy_from_slice(input);
        output[self.channel] *= self.factor;
    }
}

/// Clamps every channel to the closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy)]
pub struct RangeClamp {
    /// Lower bound, inclusive.
    pub lo: f32,
    /// Upper bound, inclusive.
    pub hi: f32,
}

impl PixelTransform for RangeClamp {
    fn in_channels(&self) -> usize {
        3
    }
    fn out_channels(&self) -> usize {
        3
    }
    fn apply(&self, input: &[f32], output: &mut [f32]) {
        for (o, &i) in output.iter_mut().zip(input) {
            *o = clamp_float(i, self.lo, self.hi);
        }
    }
}

/// Reduces a 3-channel image to a new 1-channel BT.601 grayscale image.
///
/// The original image is unchanged.
///
/// # Panics
///
/// Panics if `image` doesn't have exactly 3 channels.
///
/// # Example
///
/// ```rust
/// use raster_core::Image;
/// use raster_ops::channel::rgb_to_grayscale;
///
/// let mut img = Image::new(1, 1, 3);
/// img.set(0, 0, 0, 1.0); // pure red
/// let gray = rgb_to_grayscale(&img);
/// assert_eq!(gray.get(0, 0, 0), 0.299);
/// ```
pub fn rgb_to_grayscale(image: &Image) -> Image {
    assert_eq!(image.channels(), 3, "grayscale requires a 3-channel image");
    let mut gray = Image::new(image.width(), image.height(), 1);
    apply_transform(image, &mut gray, &Grayscale);
    gray
}

/// Adds `delta` to every sample of one channel, in place.
///
/// # Panics
///
/// Panics if `image` doesn't have exactly 3 channels or `channel >= 3`.
pub fn shift_image(image: &mut Image, channel: usize, delta: f32) {
    assert_eq!(image.channels(), 3, "shift requires a 3-channel image");
    assert!(channel < 3, "channel {} out of range", channel);
    apply_transform_in_place(image, &ChannelShift { channel, delta });
}

/// Multiplies every sample of one channel by `factor`, in place.
///
/// # Panics
///
/// Panics if `image` doesn't have exactly 3 channels or `channel >= 3`.
pub fn scale_image(image: &mut Image, channel: usize, factor: f32) {
    assert_eq!(image.channels(), 3, "scale requires a 3-channel image");
    assert!(channel < 3, "channel {} out of range", channel);
    apply_transform_in_place(image, &ChannelScale { channel, factor });
}

/// Clamps every sample to `[0, 1]`, in place.
///
/// Idempotent: applying it twice is the same as applying it once.
///
/// # Panics
///
/// Panics if `image` doesn't have exactly 3 channels.
pub fn clamp_image(image: &mut Image) {
    assert_eq!(image.channels(), 3, "clamp requires a 3-channel image");
    apply_transform_in_place(image, &RangeClamp { lo: 0.0, hi: 1.0 });
}
