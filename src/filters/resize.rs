//! Area-average downscaling for bounding the working resolution.
//!
//! Each destination pixel is the mean of the source pixels its footprint
//! covers, per channel. Deterministic and allocation-light; no
//! interpolation beyond the box filter.

use ndarray::{Array3, ArrayView3};

/// Scale factor that brings the longest side down to `max_dimension`.
///
/// Never upscales: images already within the bound get 1.0.
pub fn downscale_factor(width: usize, height: usize, max_dimension: u32) -> f64 {
    let longest = width.max(height);
    if longest == 0 {
        return 1.0;
    }
    (max_dimension as f64 / longest as f64).min(1.0)
}

/// Target dimensions `(width, height)` for a given scale, each at least 1.
pub fn scaled_dimensions(width: usize, height: usize, scale: f64) -> (usize, usize) {
    let w = ((width as f64 * scale).floor() as usize).max(1);
    let h = ((height as f64 * scale).floor() as usize).max(1);
    (w, h)
}

/// Resize an image to `(dst_width, dst_height)` with a box filter.
///
/// Works for any channel count. Equal dimensions return a plain copy.
pub fn downscale_area_u8(input: ArrayView3<u8>, dst_width: usize, dst_height: usize) -> Array3<u8> {
    let (height, width, channels) = input.dim();

    if (dst_width, dst_height) == (width, height) || width == 0 || height == 0 {
        return input.to_owned();
    }

    let mut output = Array3::<u8>::zeros((dst_height, dst_width, channels));
    let cell_w = width as f64 / dst_width as f64;
    let cell_h = height as f64 / dst_height as f64;

    for dy in 0..dst_height {
        // Footprint rows, always at least one source row
        let start_y = ((dy as f64 * cell_h) as usize).min(height - 1);
        let end_y = (((dy + 1) as f64 * cell_h) as usize).clamp(start_y + 1, height);

        for dx in 0..dst_width {
            let start_x = ((dx as f64 * cell_w) as usize).min(width - 1);
            let end_x = (((dx + 1) as f64 * cell_w) as usize).clamp(start_x + 1, width);
            let count = ((end_y - start_y) * (end_x - start_x)) as u32;

            for c in 0..channels {
                let mut sum = 0u32;
                for sy in start_y..end_y {
                    for sx in start_x..end_x {
                        sum += input[[sy, sx, c]] as u32;
                    }
                }
                // Rounded mean
                output[[dy, dx, c]] = ((sum + count / 2) / count) as u8;
            }
        }
    }

    output
}
