//! Gaussian pre-blur used ahead of gradient computation.
//!
//! A fixed 5x5 integer kernel (sigma ~1.4) normalized by its sum of 159.
//! Only pixels with a complete 5x5 neighborhood are convolved; the 2-pixel
//! frame keeps its source value.

use ndarray::{Array3, ArrayView3};

/// 5x5 Gaussian kernel, sigma ~1.4
const KERNEL_5X5: [[u32; 5]; 5] = [
    [2, 4, 5, 4, 2],
    [4, 9, 12, 9, 4],
    [5, 12, 15, 12, 5],
    [4, 9, 12, 9, 4],
    [2, 4, 5, 4, 2],
];

const KERNEL_SUM: f64 = 159.0;

/// Blur a grayscale RGBA raster with the fixed 5x5 kernel.
///
/// Reads channel 0 as the luminance sample. Output is a new grayscale RGBA
/// raster (R=G=B, alpha 255) with the same dimensions.
pub fn gaussian_blur_5x5(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let has_full_window = y >= 2 && x >= 2 && y + 2 < height && x + 2 < width;

            let value = if has_full_window {
                let mut sum = 0u32;
                for (ky, row) in KERNEL_5X5.iter().enumerate() {
                    for (kx, &kv) in row.iter().enumerate() {
                        sum += input[[y + ky - 2, x + kx - 2, 0]] as u32 * kv;
                    }
                }
                (sum as f64 / KERNEL_SUM).round().min(255.0) as u8
            } else {
                input[[y, x, 0]]
            };

            output[[y, x, 0]] = value;
            output[[y, x, 1]] = value;
            output[[y, x, 2]] = value;
            output[[y, x, 3]] = 255;
        }
    }

    output
}
