//! Per-channel intensity histograms.
//!
//! A [`ChannelHistogram`] stores one dense row of counts per channel over a
//! fixed, ordered intensity domain. The 8-bit helpers use [`NUM_LEVELS`]
//! bins, but the type carries any finite level count.

use serde::{Deserialize, Serialize};

use crate::{CoreError, RgbImageView};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Intensity levels of the 8-bit domain.
pub const NUM_LEVELS: usize = 256;

/// Dense per-channel intensity counts, indexed `[channel][level]`.
///
/// Invariant: for every channel, the counts sum to the number of samples
/// accumulated into that channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelHistogram {
    counts: Vec<u32>, // channel-major, len = channels * num_levels
    channels: usize,
    num_levels: usize,
}

impl ChannelHistogram {
    /// Empty histogram with `channels` rows over `num_levels` bins.
    pub fn new(channels: usize, num_levels: usize) -> Self {
        Self {
            counts: vec![0; channels * num_levels],
            channels,
            num_levels,
        }
    }

    /// Wrap pre-built channel-major counts, validating the shape.
    pub fn from_counts(
        channels: usize,
        num_levels: usize,
        counts: Vec<u32>,
    ) -> Result<Self, CoreError> {
        if counts.len() != channels * num_levels {
            return Err(CoreError::InvalidHistogramShape {
                channels,
                levels: num_levels,
                len: counts.len(),
            });
        }
        Ok(Self {
            counts,
            channels,
            num_levels,
        })
    }

    /// Build the three per-channel histograms of an RGB view in one pass.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(view), fields(width = view.width, height = view.height))
    )]
    pub fn from_rgb(view: &RgbImageView<'_>) -> Self {
        let mut hist = Self::new(3, NUM_LEVELS);
        for pixel in view.data.chunks_exact(3) {
            for (c, &value) in pixel.iter().enumerate() {
                hist.counts[c * NUM_LEVELS + value as usize] += 1;
            }
        }
        hist
    }

    /// Record one sample for `channel` at `level`.
    pub fn add_sample(&mut self, channel: usize, level: usize) {
        self.counts[channel * self.num_levels + level] += 1;
    }

    /// Counts of one channel, one entry per intensity level.
    pub fn channel(&self, channel: usize) -> &[u32] {
        let start = channel * self.num_levels;
        &self.counts[start..start + self.num_levels]
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    /// Total sample count of one channel.
    pub fn total_count(&self, channel: usize) -> u64 {
        self.channel(channel).iter().map(|&n| u64::from(n)).sum()
    }
}
