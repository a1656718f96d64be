use crate::CoreError;

/// Borrowed view over an interleaved 8-bit RGB buffer.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major interleaved RGB, len = w*h*3
}

impl<'a> RgbImageView<'a> {
    /// Build a view from a raw interleaved buffer, validating its length.
    pub fn from_slice(width: usize, height: usize, data: &'a [u8]) -> Result<Self, CoreError> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(CoreError::InvalidBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
