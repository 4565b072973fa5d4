//! Generic per-pixel transformation pipeline.
//!
//! A [`PixelTransform`] maps one pixel's input channel vector to an output
//! channel vector; the drivers here scan it over a whole image. Every
//! channel op and color conversion in this crate is an instance of this
//! pipeline.
//!
//! # In-Place Safety
//!
//! [`apply_transform_in_place`] is safe because each pixel's full input
//! vector is gathered before any of its channels are overwritten, and no
//! pixel ever reads another pixel's channels during a pass. Iteration order
//! is therefore unobservable: each output pixel is written exactly once and
//! independently.
//!
//! # Example
//!
//! ```rust
//! use raster_core::Image;
//! use raster_ops::pipeline::{apply_transform, PixelTransform};
//!
//! /// Inverts every channel.
//! struct Invert {
//!     channels: usize,
//! }
//!
//! impl PixelTransform for Invert {
//!     fn in_channels(&self) -> usize {
//!         self.channels
//!     }
//!     fn out_channels(&self) -> usize {
//!         self.channels
//!     }
//!     fn apply(&self, input: &[f32], output: &mut [f32]) {
//!         for (o, i) in output.iter_mut().zip(input) {
//!             *o = 1.0 - i;
//!         }
//!     }
//! }
//!
//! let src = Image::filled(4, 4, 3, 0.25);
//! let mut dst = Image::new(4, 4, 3);
//! apply_transform(&src, &mut dst, &Invert { channels: 3 });
//! assert_eq!(dst.get(0, 0, 0), 0.75);
//! ```

use raster_core::Image;

/// A per-pixel channel-vector transformation.
///
/// Implementors carry their own typed configuration (channel index, delta,
/// clamp range, ...) as struct fields; the pipeline never sees untyped
/// parameters.
pub trait PixelTransform {
    /// Number of input channels the transform consumes.
    fn in_channels(&self) -> usize;

    /// Number of output channels the transform produces.
    fn out_channels(&self) -> usize;

    /// Maps one pixel's channel vector.
    ///
    /// `input` has length [`in_channels`](Self::in_channels) and `output`
    /// has length [`out_channels`](Self::out_channels).
    fn apply(&self, input: &[f32], output: &mut [f32]);
}

/// Applies `transform` to every pixel of `input`, writing into `output`.
///
/// For each pixel: gathers all input channels at (x, y), invokes the
/// transform, scatters the result into `output` at (x, y). Channel counts
/// of the two images may differ (e.g. grayscale reduction).
///
/// # Panics
///
/// Panics if `input` and `output` differ in width or height, or if either
/// image's channel count doesn't match the transform's.
pub fn apply_transform<T: PixelTransform + ?Sized>(input: &Image, output: &mut Image, transform: &T) {
    assert_eq!(input.width(), output.width(), "pipeline width mismatch");
    assert_eq!(input.height(), output.height(), "pipeline height mismatch");
    assert_eq!(
        input.channels(),
        transform.in_channels(),
        "transform expects {} input channels, image has {}",
        transform.in_channels(),
        input.channels()
    );
    assert_eq!(
        output.channels(),
        transform.out_channels(),
        "transform produces {} output channels, image has {}",
        transform.out_channels(),
        output.channels()
    );

    let mut src = vec![0.0f32; input.channels()];
    let mut dst = vec![0.0f32; output.channels()];
    for y in 0..input.height() as i32 {
        for x in 0..input.width() as i32 {
            for (c, sample) in src.iter_mut().enumerate() {
                *sample = input.get(x, y, c);
            }
            transform.apply(&src, &mut dst);
            for (c, &sample) in dst.iter().enumerate() {
                output.set(x, y, c, sample);
            }
        }
    }
}

/// Applies a shape-preserving `transform` to `image` in place.
///
/// # Panics
///
/// Panics if the transform's input and output channel counts differ, or if
/// they don't match the image's channel count.
pub fn apply_transform_in_place<T: PixelTransform + ?Sized>(image: &mut Image, transform: &T) {
    assert_eq!(
        transform.in_channels(),
        transform.out_channels(),
        "in-place transform must preserve channel count"
    );
    assert_eq!(
        image.channels(),
        transform.in_channels(),
        "transform expects {} channels, image has {}",
        transform.in_channels(),
        image.channels()
    );

    let mut src = vec![0.0f32; image.channels()];
    let mut dst = vec![0.0f32; image.channels()];
    for y in 0..image.height() as i32 {
        for x in 0..image.width() as i32 {
            // Gather the full vector before the first write to this pixel
            for (c, sample) in src.iter_mut().enumerate() {
                *sample = image.get(x, y, c);
            }
            transform.apply(&src, &mut dst);
            for (c, &sample) in dst.iter().enumerate() {
                image.set(x, y, c, sample);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Swaps channels 0 and 2, doubles channel 1.
    struct Scramble;

    impl PixelTransform for Scramble {
        fn in_channels(&self) -> usize {
            3
        }
        fn out_channels(&self) -> usize {
            3
        }
        fn apply(&self, input: &[f32], output: &mut [f32]) {
            output[0] = input[2];
            output[1] = input[1] * 2.0;
            output[2] = input[0];
        }
    }

    /// Sums all input channels into a single output channel.
    struct SumReduce {
        channels: usize,
    }

    impl PixelTransform for SumReduce {
        fn in_channels(&self) -> usize {
            self.channels
        }
        fn out_channels(&self) -> usize {
            1
        }
        fn apply(&self, input: &[f32], output: &mut [f32]) {
            output[0] = input.iter().sum();
        }
    }

    #[test]
    fn test_apply_transform() {
        let mut src = Image::new(2, 2, 3);
        src.set(1, 0, 0, 0.1);
        src.set(1, 0, 1, 0.2);
        src.set(1, 0, 2, 0.3);

        let mut dst = Image::new(2, 2, 3);
        apply_transform(&src, &mut dst, &Scramble);

        assert_eq!(dst.get(1, 0, 0), 0.3);
        assert_eq!(dst.get(1, 0, 1), 0.4);
        assert_eq!(dst.get(1, 0, 2), 0.1);
        // Source untouched
        assert_eq!(src.get(1, 0, 0), 0.1);
    }

    #[test]
    fn test_apply_transform_channel_reduction() {
        let src = Image::filled(3, 3, 4, 0.25);
        let mut dst = Image::new(3, 3, 1);
        apply_transform(&src, &mut dst, &SumReduce { channels: 4 });
        assert_eq!(dst.get(2, 2, 0), 1.0);
    }

    #[test]
    fn test_apply_transform_in_place() {
        let mut img = Image::new(4, 4, 3);
        img.set(3, 3, 0, 0.5);
        img.set(3, 3, 2, 0.75);
        apply_transform_in_place(&mut img, &Scramble);
        // In-place pass sees the pre-pass values of its own pixel
        assert_eq!(img.get(3, 3, 0), 0.75);
        assert_eq!(img.get(3, 3, 2), 0.5);
    }

    #[test]
    #[should_panic(expected = "width mismatch")]
    fn test_apply_transform_shape_mismatch_panics() {
        let src = Image::new(4, 4, 3);
        let mut dst = Image::new(5, 4, 3);
        apply_transform(&src, &mut dst, &Scramble);
    }

    #[test]
    #[should_panic(expected = "input channels")]
    fn test_apply_transform_channel_mismatch_panics() {
        let src = Image::new(4, 4, 2);
        let mut dst = Image::new(4, 4, 3);
        apply_transform(&src, &mut dst, &Scramble);
    }

    #[test]
    #[should_panic(expected = "preserve channel count")]
    fn test_in_place_requires_matching_channels() {
        let mut img = Image::new(4, 4, 4);
        apply_transform_in_place(&mut img, &SumReduce { channels: 4 });
    }
}
