//! # raster-core
//!
//! Core types for planar float raster processing.
//!
//! This crate provides the foundational pieces used throughout raster-rs:
//!
//! - [`Image`] - Owned channel-planar `f32` buffer
//! - [`addressing`] - Edge-clamped coordinate math underlying every read
//! - [`Error`] / [`Result`] - Construction errors
//! - [`luma`] - BT.601 luma constants for grayscale reduction
//!
//! ## Addressing Policy
//!
//! Out-of-range coordinates are defined behavior, never failures: reads
//! clamp to the nearest edge pixel, writes outside bounds are dropped.
//! Contract violations (an operation handed the wrong channel count) are
//! fatal panics in the operation crates, never silently wrong output.
//!
//! ## Crate Structure
//!
//! `raster-core` is the leaf crate of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (transforms, color conversion, resampling)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod addressing;
pub mod error;
pub mod image;
pub mod luma;

// Re-exports for convenience
pub use addressing::{clamp_float, clamp_int, plane_offset};
pub use error::{Error, Result};
pub use image::Image;
pub use luma::{luminance_bt601, BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R};
