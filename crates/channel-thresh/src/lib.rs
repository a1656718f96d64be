//! High-level facade crate for the `channel-thresh-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - (feature-gated) end-to-end helpers that build per-channel histograms
//!   from an in-memory `image::RgbImage` and run the Otsu optimizer or the
//!   quantizer on it.
//!
//! Reading and writing image files is out of scope; callers decode images
//! themselves and hand over in-memory buffers.
//!
//! ## Quickstart
//!
//! ```
//! use channel_thresh::pipeline;
//!
//! let img = image::RgbImage::from_fn(64, 64, |x, _| {
//!     if x < 32 {
//!         image::Rgb([50, 100, 200])
//!     } else {
//!         image::Rgb([250, 220, 240])
//!     }
//! });
//!
//! let thresholds = pipeline::otsu_thresholds_image(&img);
//! assert_eq!(thresholds, [50, 100, 200]);
//! ```
//!
//! ## API map
//! - `channel_thresh::core`: image views, histograms, PMF/CDF statistics.
//! - `channel_thresh::otsu`: between-class variance threshold selection.
//! - `channel_thresh::quantize`: uniform and error-diffusing level reduction.
//! - `channel_thresh::pipeline` (feature `image`): end-to-end helpers from
//!   `image::RgbImage`.

pub use channel_thresh_core as core;
pub use channel_thresh_otsu as otsu;
pub use channel_thresh_quantize as quantize;

pub use channel_thresh_core::{ChannelHistogram, ChannelStats, CoreError, RgbImageView, NUM_LEVELS};
pub use channel_thresh_otsu::{otsu_level, otsu_thresholds};
pub use channel_thresh_quantize::{quantize_rgb, QuantizeError, QuantizeMethod};

#[cfg(feature = "image")]
pub mod pipeline;
