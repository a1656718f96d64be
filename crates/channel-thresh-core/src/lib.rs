//! Core types and utilities for per-channel intensity statistics.
//!
//! This crate is intentionally small and purely statistical. It does *not*
//! load, decode, or write images; callers hand it borrowed pixel buffers and
//! get histograms, probability mass functions, and cumulative distribution
//! functions back.

mod error;
mod histogram;
mod image;
mod logger;
mod stats;

pub use error::CoreError;
pub use histogram::{ChannelHistogram, NUM_LEVELS};
pub use image::RgbImageView;
pub use stats::{histogram_to_cdf, histogram_to_pmf, ChannelStats};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
