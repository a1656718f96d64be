use channel_thresh_core::RgbImageView;
use serde::{Deserialize, Serialize};

/// Which level-reduction remapping to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantizeMethod {
    /// Fixed bin width, sample divided and truncated.
    Uniform,
    /// Bin width with a per-channel running remainder carried into the
    /// next sample before dividing.
    ErrorDiffusion,
}

/// Errors produced by the quantizer input boundary.
#[derive(thiserror::Error, Debug)]
pub enum QuantizeError {
    #[error("quantization level count out of range (got {0}, expected 1..=256)")]
    InvalidLevels(u32),
}

/// Reduce an RGB view to `levels` grey levels per channel.
///
/// Returns an interleaved buffer of level indices in `[0, levels)`, same
/// layout as the input. The remapping itself is total; only the level
/// count is validated.
pub fn quantize_rgb(
    src: &RgbImageView<'_>,
    levels: u32,
    method: QuantizeMethod,
) -> Result<Vec<u8>, QuantizeError> {
    if levels == 0 || levels > 256 {
        return Err(QuantizeError::InvalidLevels(levels));
    }
    Ok(match method {
        QuantizeMethod::Uniform => uniform(src, levels),
        QuantizeMethod::ErrorDiffusion => error_diffusion(src, levels),
    })
}

fn uniform(src: &RgbImageView<'_>, levels: u32) -> Vec<u8> {
    let bin_width = 256.0 / f64::from(levels);
    src.data
        .iter()
        .map(|&v| (f64::from(v) / bin_width) as u8)
        .collect()
}

fn error_diffusion(src: &RgbImageView<'_>, levels: u32) -> Vec<u8> {
    let bin_width = 256 / levels;
    let mut out = vec![0u8; src.data.len()];
    for c in 0..3 {
        // remainder accumulator is private to this channel
        let mut remainder = 0u32;
        for (slot, &v) in out.iter_mut().zip(src.data.iter()).skip(c).step_by(3) {
            let carried = (u32::from(v) + remainder).min(255);
            remainder = u32::from(v) % bin_width;
            *slot = (carried / bin_width) as u8;
        }
    }
    out
}
