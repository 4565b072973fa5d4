//! Parallel resampling using Rayon.
//!
//! Per-pixel resampling is embarrassingly parallel: every output sample is
//! computed from input-only state and written to a disjoint location, so the
//! planar output buffer can be split into planes and rows with no
//! synchronization. Results are bit-identical to the serial
//! [`crate::resize::resize`] path - the per-pixel arithmetic is shared.
//!
//! # Example
//!
//! ```rust
//! use raster_core::Image;
//! use raster_ops::parallel;
//! use raster_ops::Interpolation;
//!
//! let src = Image::filled(256, 256, 3, 0.5);
//! let dst = parallel::resize(&src, 512, 512, Interpolation::Bilinear);
//! assert_eq!(dst.dimensions(), (512, 512));
//! ```

use crate::resize::Interpolation;
use raster_core::Image;
use rayon::prelude::*;
use tracing::debug;

/// Parallel resize to `width` x `height`.
///
/// Splits the output into channel planes, then into rows within each plane,
/// and fills rows in parallel. Same sampling contract as
/// [`crate::resize::resize`]: half-pixel center alignment, edge-clamped
/// source reads, output channel count equal to the input's.
pub fn resize(image: &Image, width: usize, height: usize, method: Interpolation) -> Image {
    debug!(
        src_w = image.width(),
        src_h = image.height(),
        dst_w = width,
        dst_h = height,
        ?method,
        "resizing image (parallel)"
    );
    let mut out = Image::new(width, height, image.channels());
    if out.is_empty() {
        return out;
    }

    let a_x = image.width() as f32 / width as f32;
    let b_x = a_x * 0.5 - 0.5;
    let a_y = image.height() as f32 / height as f32;
    let b_y = a_y * 0.5 - 0.5;

    let plane_len = width * height;
    out.data_mut()
        .par_chunks_mut(plane_len)
        .enumerate()
        .for_each(|(c, plane)| {
            plane
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    let src_y = y as f32 * a_y + b_y;
                    for (x, sample) in row.iter_mut().enumerate() {
                        let src_x = x as f32 * a_x + b_x;
                        *sample = method.sample(image, src_x, src_y, c);
                    }
                });
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(w: usize, h: usize, c: usize) -> Image {
        let mut img = Image::new(w, h, c);
        for ch in 0..c {
            for y in 0..h {
                for x in 0..w {
                    let v = ((x + y + ch) % 2) as f32;
                    img.set(x as i32, y as i32, ch, v);
                }
            }
        }
        img
    }

    #[test]
    fn test_parallel_matches_serial_bilinear() {
        let img = checkerboard(17, 13, 3);
        let serial = crate::resize::resize(&img, 40, 9, Interpolation::Bilinear);
        let par = resize(&img, 40, 9, Interpolation::Bilinear);
        assert_eq!(par.data(), serial.data());
    }

    #[test]
    fn test_parallel_matches_serial_nearest() {
        let img = checkerboard(8, 8, 2);
        let serial = crate::resize::resize(&img, 3, 21, Interpolation::Nearest);
        let par = resize(&img, 3, 21, Interpolation::Nearest);
        assert_eq!(par.data(), serial.data());
    }

    #[test]
    fn test_parallel_empty_output() {
        let img = checkerboard(4, 4, 3);
        let out = resize(&img, 0, 4, Interpolation::Bilinear);
        assert!(out.is_empty());
        assert_eq!(out.channels(), 3);
    }
}
