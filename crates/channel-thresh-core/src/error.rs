/// Errors produced at the pixel-buffer and histogram input boundary.
///
/// The statistics themselves are total functions; malformed shapes are
/// rejected here, before any accumulation starts.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("invalid interleaved buffer length (expected {expected} bytes, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },

    #[error("invalid histogram shape (channels={channels}, levels={levels}, counts len={len})")]
    InvalidHistogramShape {
        channels: usize,
        levels: usize,
        len: usize,
    },
}
