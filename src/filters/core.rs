//! Core raster helpers shared by the filters and the bindings.

use ndarray::{Array3, ArrayView3};

use crate::error::PuzzleError;

/// Build an RGBA raster from a flat, row-major byte buffer.
///
/// # Arguments
/// * `data` - RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn rgba_from_raw(data: Vec<u8>, width: usize, height: usize) -> Result<Array3<u8>, PuzzleError> {
    let actual = data.len();
    // Dimensions whose byte count overflows usize can never match a buffer
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .unwrap_or(usize::MAX);
    if actual != expected {
        return Err(PuzzleError::BufferSizeMismatch { expected, actual });
    }

    Array3::from_shape_vec((height, width, 4), data)
        .map_err(|_| PuzzleError::BufferSizeMismatch { expected, actual })
}

/// Reject anything that is not a 4-channel raster.
pub fn ensure_rgba(image: &ArrayView3<u8>) -> Result<(), PuzzleError> {
    match image.dim().2 {
        4 => Ok(()),
        channels => Err(PuzzleError::UnsupportedChannels(channels)),
    }
}
