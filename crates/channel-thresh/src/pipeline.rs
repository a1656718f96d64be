use crate::{core, otsu, quantize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] core::CoreError),

    #[error(transparent)]
    Quantize(#[from] quantize::QuantizeError),

    #[error("quantized buffer does not fit the image dimensions (width={width}, height={height})")]
    OutputBuffer { width: u32, height: u32 },
}

/// Convert an `image::RgbImage` into the lightweight borrowed view type.
pub fn rgb_view(img: &::image::RgbImage) -> core::RgbImageView<'_> {
    core::RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Compute the per-channel Otsu threshold vector of an in-memory RGB image.
///
/// Runs the complete chain: histogram, PMF/CDF statistics, between-class
/// variance optimizer, independently for each of the three channels.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img), fields(width = img.width(), height = img.height()))
)]
pub fn otsu_thresholds_image(img: &::image::RgbImage) -> [u8; 3] {
    let view = rgb_view(img);
    let hist = core::ChannelHistogram::from_rgb(&view);
    let stats = core::ChannelStats::from_histogram(&hist);
    let levels = otsu::otsu_thresholds(&stats);

    let mut thresholds = [0u8; 3];
    for (dst, level) in thresholds.iter_mut().zip(levels) {
        *dst = level as u8;
    }
    thresholds
}

/// Same as [`otsu_thresholds_image`], starting from a raw interleaved
/// RGB buffer. The buffer length is validated against the dimensions.
pub fn otsu_thresholds_from_rgb_u8(
    width: usize,
    height: usize,
    pixels: &[u8],
) -> Result<[u8; 3], PipelineError> {
    let view = core::RgbImageView::from_slice(width, height, pixels)?;
    let hist = core::ChannelHistogram::from_rgb(&view);
    let stats = core::ChannelStats::from_histogram(&hist);
    let levels = otsu::otsu_thresholds(&stats);

    let mut thresholds = [0u8; 3];
    for (dst, level) in thresholds.iter_mut().zip(levels) {
        *dst = level as u8;
    }
    Ok(thresholds)
}

/// Quantize an in-memory RGB image to `levels` grey levels per channel.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img), fields(width = img.width(), height = img.height()))
)]
pub fn quantize_image(
    img: &::image::RgbImage,
    levels: u32,
    method: quantize::QuantizeMethod,
) -> Result<::image::RgbImage, PipelineError> {
    let view = rgb_view(img);
    let data = quantize::quantize_rgb(&view, levels, method)?;
    ::image::RgbImage::from_raw(img.width(), img.height(), data).ok_or(
        PipelineError::OutputBuffer {
            width: img.width(),
            height: img.height(),
        },
    )
}
