//! ITU-R BT.601 luma constants.
//!
//! Grayscale reduction in `raster-ops` uses the BT.601 weighting:
//! `Y = 0.299*R + 0.587*G + 0.114*B`.

/// BT.601 luma coefficient for the red channel.
pub const BT601_LUMA_R: f32 = 0.299;

/// BT.601 luma coefficient for the green channel.
pub const BT601_LUMA_G: f32 = 0.587;

/// BT.601 luma coefficient for the blue channel.
pub const BT601_LUMA_B: f32 = 0.114;

/// BT.601 luma coefficients as an array [R, G, B].
pub const BT601_LUMA: [f32; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Calculates BT.601 luma from RGB values.
///
/// # Example
///
/// ```rust
/// use raster_core::luma::luminance_bt601;
///
/// assert_eq!(luminance_bt601([1.0, 0.0, 0.0]), 0.299);
/// assert_eq!(luminance_bt601([0.0, 1.0, 0.0]), 0.587);
/// assert_eq!(luminance_bt601([0.0, 0.0, 1.0]), 0.114);
/// ```
#[inline]
pub fn luminance_bt601(rgb: [f32; 3]) -> f32 {
    rgb[0] * BT601_LUMA_R + rgb[1] * BT601_LUMA_G + rgb[2] * BT601_LUMA_B
}
