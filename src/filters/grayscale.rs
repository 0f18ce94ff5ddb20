//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luma coefficients (the weights browsers and most
//! decoders use for 8-bit sRGB content). The result keeps the RGBA layout:
//! R=G=B=luma and alpha forced to fully opaque, so later stages can read
//! any color channel as the luminance sample.

use ndarray::{Array3, ArrayView3};

/// ITU-R BT.601 luma coefficients
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Luma of a single RGB triple, rounded to the nearest 8-bit value.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let gray = LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64;
    gray.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGBA u8 image to grayscale.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values (0-255)
///
/// # Returns
/// New array with luma in the RGB channels and alpha set to 255
pub fn grayscale_rgba_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let gray = luma_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);

            output[[y, x, 0]] = gray;
            output[[y, x, 1]] = gray;
            output[[y, x, 2]] = gray;
            output[[y, x, 3]] = 255;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn pixel(r: u8, g: u8, b: u8, a: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = r;
        img[[0, 0, 1]] = g;
        img[[0, 0, 2]] = b;
        img[[0, 0, 3]] = a;
        img
    }

    #[test]
    fn test_grayscale_pure_red() {
        let result = grayscale_rgba_u8(pixel(255, 0, 0, 255).view());

        // 0.299 * 255 = 76.245
        assert_eq!(result[[0, 0, 0]], 76);
        assert_eq!(result[[0, 0, 1]], 76);
        assert_eq!(result[[0, 0, 2]], 76);
        assert_eq!(result[[0, 0, 3]], 255);
    }

    #[test]
    fn test_grayscale_pure_green_rounds_up() {
        let result = grayscale_rgba_u8(pixel(0, 255, 0, 255).view());

        // 0.587 * 255 = 149.685
        assert_eq!(result[[0, 0, 0]], 150);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let result = grayscale_rgba_u8(pixel(255, 255, 255, 255).view());
        assert_eq!(result[[0, 0, 0]], 255);
    }

    #[test]
    fn test_grayscale_forces_opaque_alpha() {
        let result = grayscale_rgba_u8(pixel(10, 20, 30, 0).view());

        assert_eq!(result[[0, 0, 3]], 255);
        // 2.99 + 11.74 + 3.42 = 18.15
        assert_eq!(result[[0, 0, 0]], 18);
    }

    #[test]
    fn test_grayscale_does_not_touch_input() {
        let img = pixel(200, 100, 50, 7);
        let _ = grayscale_rgba_u8(img.view());
        assert_eq!(img[[0, 0, 0]], 200);
        assert_eq!(img[[0, 0, 3]], 7);
    }

    #[test]
    fn test_grayscale_keeps_dimensions() {
        let img = Array3::<u8>::zeros((3, 7, 4));
        let result = grayscale_rgba_u8(img.view());
        assert_eq!(result.dim(), (3, 7, 4));
    }
}
