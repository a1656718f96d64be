//! Grey-level reduction for interleaved RGB buffers.
//!
//! Two closed-form remappings, applied independently per channel:
//! - uniform quantization: every sample is divided by a fixed bin width,
//! - error-diffusing quantization ("improved grey scale"): the integer
//!   remainder of the previous sample of the same channel is added before
//!   dividing, which breaks up banding in smooth gradients.
//!
//! Output samples are quantization level indices in `[0, levels)`, not
//! rescaled intensities.

mod quantize;

pub use quantize::{quantize_rgb, QuantizeError, QuantizeMethod};
