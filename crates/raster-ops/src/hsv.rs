//! RGB <-> HSV color-space conversion.
//!
//! Both directions operate on hue normalized to `[0, 1)` rather than
//! degrees, and are expressed as per-pixel transforms over the pipeline.
//! Conversions run in place and require a 3-channel image.
//!
//! # Conventions
//!
//! - `V = max(R, G, B)`, chroma `C = V - min(R, G, B)`
//! - `S = C / V`, with `S = 0` for black (`V == 0`)
//! - Achromatic pixels (`C == 0`) take hue 0
//! - `hsv_to_rgb` selects one of six half-open hue sectors by `floor(H * 6)`
//!
//! The round trip RGB -> HSV -> RGB reproduces the original within floating
//! tolerance, grays included.
//!
//! # Example
//!
//! ```rust
//! use raster_core::Image;
//! use raster_ops::hsv::{rgb_to_hsv, hsv_to_rgb};
//!
//! let mut img = Image::from_data(1, 1, 3, vec![1.0, 0.0, 0.0]).unwrap();
//! rgb_to_hsv(&mut img);
//! // Pure red: hue 0, full saturation, full value
//! assert_eq!(img.get(0, 0, 0), 0.0);
//! assert_eq!(img.get(0, 0, 1), 1.0);
//! assert_eq!(img.get(0, 0, 2), 1.0);
//! hsv_to_rgb(&mut img);
//! assert_eq!(img.get(0, 0, 0), 1.0);
//! ```

use crate::pipeline::{apply_transform_in_place, PixelTransform};
use raster_core::Image;

// ============================================================================
// Per-pixel conversions
// ============================================================================

/// Converts one RGB pixel to (H, S, V), hue normalized to `[0, 1)`.
///
/// # Example
///
/// ```rust
/// use raster_ops::hsv::rgb_pixel_to_hsv;
///
/// let [h, s, v] = rgb_pixel_to_hsv([0.0, 1.0, 0.0]);
/// assert!((h - 1.0 / 3.0).abs() < 1e-6); // green sits a third around the wheel
/// assert_eq!(s, 1.0);
/// assert_eq!(v, 1.0);
/// ```
#[inline]
pub fn rgb_pixel_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let v = r.max(g).max(b);
    let m = r.min(g).min(b);
    let c = v - m;

    let s = if v == 0.0 { 0.0 } else { c / v };

    let hue_raw = if c == 0.0 {
        0.0
    } else if v == r {
        (g - b) / c
    } else if v == g {
        (b - r) / c + 2.0
    } else {
        (r - g) / c + 4.0
    };
    let h = if hue_raw < 0.0 {
        hue_raw / 6.0 + 1.0
    } else {
        hue_raw / 6.0
    };

    [h, s, v]
}

/// Converts one (H, S, V) pixel back to RGB.
///
/// Hue is normalized to `[0, 1)`. Sector boundaries are half-open: an `H*6`
/// that lands exactly on an integer belongs to the sector it opens.
#[inline]
pub fn hsv_pixel_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    if s == 0.0 {
        // Achromatic
        return [v, v, v];
    }
    let c = v * s;
    let max_rgb = v;
    let min_rgb = v - c;
    let h6 = h * 6.0;

    if h6 < 1.0 {
        [max_rgb, h6 * c + min_rgb, min_rgb]
    } else if h6 < 2.0 {
        [-(h6 - 2.0) * c + min_rgb, max_rgb, min_rgb]
    } else if h6 < 3.0 {
        [min_rgb, max_rgb, (h6 - 2.0) * c + min_rgb]
    } else if h6 < 4.0 {
        [min_rgb, -(h6 - 4.0) * c + min_rgb, max_rgb]
    } else if h6 < 5.0 {
        [(h6 - 4.0) * c + min_rgb, min_rgb, max_rgb]
    } else {
        [max_rgb, min_rgb, -(h6 - 6.0) * c + min_rgb]
    }
}

// ============================================================================
// Pipeline transforms and in-place wrappers
// ============================================================================

/// RGB -> HSV as a per-pixel transform.
#[derive(Debug, Clone, Copy)]
pub struct RgbToHsv;

impl PixelTransform for RgbToHsv {
    fn in_channels(&self) -> usize {
        3
    }
    fn out_channels(&self) -> usize {
        3
    }
    fn apply(&self, input: &[f32], output: &mut [f32]) {
        output.copy_from_slice(&rgb_pixel_to_hsv([input[0], input[1], input[2]]));
    }
}

/// HSV -> RGB as a per-pixel transform.
#[derive(Debug, Clone, Copy)]
pub struct HsvToRgb;

impl PixelTransform for HsvToRgb {
    fn in_channels(&self) -> usize {
        3
    }
    fn out_channels(&self) -> usize {
        3
    }
    fn apply(&self, input: &[f32], output: &mut [f32]) {
        output.copy_from_slice(&hsv_pixel_to_rgb([input[0], input[1], input[2]]));
    }
}

/// Converts an RGB image to HSV in place.
///
/// # Panics
///
/// Panics if `image` doesn't have exactly 3 channels.
pub fn rgb_to_hsv(image: &mut Image) {
    assert_eq!(image.channels(), 3, "rgb_to_hsv requires a 3-channel image");
    apply_transform_in_place(image, &RgbToHsv);
}

/// Converts an HSV image back to RGB in place.
///
/// # Panics
///
/// Panics if `image` doesn't have exactly 3 channels.
pub fn hsv_to_rgb(image: &mut Image) {
    assert_eq!(image.channels(), 3, "hsv_to_rgb requires a 3-channel image");
    apply_transform_in_place(image, &HsvToRgb);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_eq(got: [f32; 3], want: [f32; 3]) {
        for (&g, &w) in got.iter().zip(&want) {
            assert_abs_diff_eq!(g, w, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_primaries_forward() {
        assert_rgb_eq(rgb_pixel_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_rgb_eq(rgb_pixel_to_hsv([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 1.0]);
        assert_rgb_eq(rgb_pixel_to_hsv([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 1.0]);
    }

    #[test]
    fn test_secondaries_forward() {
        // Yellow, cyan, magenta land between the primaries
        assert_rgb_eq(rgb_pixel_to_hsv([1.0, 1.0, 0.0]), [1.0 / 6.0, 1.0, 1.0]);
        assert_rgb_eq(rgb_pixel_to_hsv([0.0, 1.0, 1.0]), [0.5, 1.0, 1.0]);
        assert_rgb_eq(rgb_pixel_to_hsv([1.0, 0.0, 1.0]), [5.0 / 6.0, 1.0, 1.0]);
    }

    #[test]
    fn test_negative_raw_hue_wraps() {
        // V == R with B > G gives a negative raw hue, normalized into [0, 1)
        let [h, _, _] = rgb_pixel_to_hsv([1.0, 0.0, 0.5]);
        assert!(h > 0.9 && h < 1.0, "hue {} should wrap below 1", h);
    }

    #[test]
    fn test_achromatic() {
        assert_rgb_eq(rgb_pixel_to_hsv([0.4, 0.4, 0.4]), [0.0, 0.0, 0.4]);
        assert_rgb_eq(rgb_pixel_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        // And back: S == 0 short-circuits to gray
        assert_rgb_eq(hsv_pixel_to_rgb([0.7, 0.0, 0.4]), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn test_pixel_roundtrip_grid() {
        // Sample the RGB cube away from degenerate equal-channel diagonals
        let levels = [0.05, 0.3, 0.55, 0.8, 1.0];
        for (i, &r) in levels.iter().enumerate() {
            for (j, &g) in levels.iter().enumerate() {
                for (k, &b) in levels.iter().enumerate() {
                    if i == j || j == k || i == k {
                        continue;
                    }
                    let back = hsv_pixel_to_rgb(rgb_pixel_to_hsv([r, g, b]));
                    assert_rgb_eq(back, [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn test_image_roundtrip() {
        let data = vec![
            0.9, 0.1, 0.3, 0.7, // R plane
            0.2, 0.8, 0.1, 0.4, // G plane
            0.5, 0.3, 0.9, 0.1, // B plane
        ];
        let mut img = Image::from_data(2, 2, 3, data.clone()).unwrap();
        rgb_to_hsv(&mut img);
        hsv_to_rgb(&mut img);
        for (&got, &want) in img.data().iter().zip(&data) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_gray_image_roundtrip() {
        let mut img = Image::filled(3, 3, 3, 0.6);
        rgb_to_hsv(&mut img);
        // Hue is 0 by convention for grays
        assert_eq!(img.get(1, 1, 0), 0.0);
        assert_eq!(img.get(1, 1, 1), 0.0);
        hsv_to_rgb(&mut img);
        assert_abs_diff_eq!(img.get(1, 1, 2), 0.6, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "3-channel")]
    fn test_rgb_to_hsv_wrong_channel_count_panics() {
        rgb_to_hsv(&mut Image::new(2, 2, 1));
    }
}
