//! Canny edge detection for outline extraction.
//!
//! Five fixed stages, each producing a fresh buffer:
//! 1. 5x5 Gaussian blur ([`gaussian_blur_5x5`])
//! 2. Sobel gradient magnitude and direction ([`sobel_gradient`])
//! 3. Non-maximum suppression along the gradient ([`non_max_suppression`])
//! 4. Double threshold into strong / weak / none ([`double_threshold`])
//! 5. Hysteresis from strong pixels across 8-connectivity ([`hysteresis`])
//!
//! Input is a grayscale RGBA raster (channel 0 is read as luminance).
//! Output is an RGBA raster of the same size where edge pixels are
//! 255 in every channel and everything else is 0. The 1-pixel frame never
//! carries gradient, so it is never classified as an edge.

use std::f32::consts::PI;

use ndarray::{Array2, Array3, ArrayView3};

use super::blur::gaussian_blur_5x5;

/// Magnitude at or above which a pixel is a strong edge
pub const HIGH_THRESHOLD: f32 = 100.0;
/// Magnitude at or above which a pixel is a weak edge
pub const LOW_THRESHOLD: f32 = 50.0;

/// Per-pixel Sobel response.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// sqrt(gx^2 + gy^2), shape (height, width)
    pub magnitude: Array2<f32>,
    /// atan2(gy, gx) in radians, shape (height, width)
    pub direction: Array2<f32>,
}

impl GradientField {
    pub fn dim(&self) -> (usize, usize) {
        self.magnitude.dim()
    }
}

/// Double-threshold classification of a suppressed magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    None,
    Weak,
    Strong,
}

/// Compute the Sobel gradient of a grayscale RGBA raster.
///
/// The outermost row and column on every side stay at zero magnitude and
/// zero direction.
pub fn sobel_gradient(input: ArrayView3<u8>) -> GradientField {
    let (height, width, _) = input.dim();
    let mut magnitude = Array2::<f32>::zeros((height, width));
    let mut direction = Array2::<f32>::zeros((height, width));

    let kernel_x: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
    let kernel_y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut gx = 0i32;
            let mut gy = 0i32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let lum = input[[y + ky - 1, x + kx - 1, 0]] as i32;
                    gx += lum * kernel_x[ky][kx];
                    gy += lum * kernel_y[ky][kx];
                }
            }

            let (gx, gy) = (gx as f32, gy as f32);
            magnitude[[y, x]] = (gx * gx + gy * gy).sqrt();
            direction[[y, x]] = gy.atan2(gx);
        }
    }

    GradientField {
        magnitude,
        direction,
    }
}

/// Neighbor offsets (dx, dy) along a gradient direction.
///
/// The direction is folded into [0, PI) and bucketed into four 45-degree
/// sectors centred on 0, 45, 90 and 135 degrees. Image y grows downward, so
/// a positive angle points toward +x/+y.
#[inline]
fn gradient_neighbors(angle: f32) -> ((isize, isize), (isize, isize)) {
    let folded = if angle < 0.0 { angle + PI } else { angle };

    if folded < PI / 8.0 || folded >= 7.0 * PI / 8.0 {
        ((-1, 0), (1, 0))
    } else if folded < 3.0 * PI / 8.0 {
        ((-1, -1), (1, 1))
    } else if folded < 5.0 * PI / 8.0 {
        ((0, -1), (0, 1))
    } else {
        ((1, -1), (-1, 1))
    }
}

/// Thin edges by keeping only local maxima along the gradient direction.
///
/// A pixel survives when its magnitude is >= both neighbors along the
/// bucketed direction; otherwise it becomes 0. The 1-pixel frame is 0.
pub fn non_max_suppression(gradient: &GradientField) -> Array2<f32> {
    let (height, width) = gradient.dim();
    let mut result = Array2::<f32>::zeros((height, width));

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mag = gradient.magnitude[[y, x]];
            let ((dx1, dy1), (dx2, dy2)) = gradient_neighbors(gradient.direction[[y, x]]);

            let n1 = gradient.magnitude[[(y as isize + dy1) as usize, (x as isize + dx1) as usize]];
            let n2 = gradient.magnitude[[(y as isize + dy2) as usize, (x as isize + dx2) as usize]];

            if mag >= n1 && mag >= n2 {
                result[[y, x]] = mag;
            }
        }
    }

    result
}

/// Classify suppressed magnitudes against the low/high thresholds.
pub fn double_threshold(suppressed: &Array2<f32>, low: f32, high: f32) -> Array2<EdgeClass> {
    suppressed.mapv(|mag| {
        if mag >= high {
            EdgeClass::Strong
        } else if mag >= low {
            EdgeClass::Weak
        } else {
            EdgeClass::None
        }
    })
}

/// Keep strong pixels and every weak pixel 8-connected to one.
///
/// Each unvisited strong pixel seeds a depth-first flood over a worklist;
/// the visited map guarantees every pixel is absorbed at most once.
///
/// # Returns
/// RGBA raster: edges are (255, 255, 255, 255), everything else is zero
pub fn hysteresis(classes: &Array2<EdgeClass>) -> Array3<u8> {
    let (height, width) = classes.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));
    let mut visited = vec![false; width * height];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if classes[[y, x]] != EdgeClass::Strong || visited[y * width + x] {
                continue;
            }

            visited[y * width + x] = true;
            stack.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                output.slice_mut(ndarray::s![cy, cx, ..]).fill(255);

                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = cx as i32 + dx;
                        let ny = cy as i32 + dy;
                        if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                            continue;
                        }

                        let (nx, ny) = (nx as usize, ny as usize);
                        let nidx = ny * width + nx;
                        if !visited[nidx] && classes[[ny, nx]] != EdgeClass::None {
                            visited[nidx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
    }

    output
}

/// Run the full Canny pipeline on a grayscale RGBA raster.
///
/// # Returns
/// Binary RGBA raster (0 or 255) with the same dimensions as `input`
pub fn canny_edges_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let blurred = gaussian_blur_5x5(input);
    let gradient = sobel_gradient(blurred.view());
    let suppressed = non_max_suppression(&gradient);
    let classes = double_threshold(&suppressed, LOW_THRESHOLD, HIGH_THRESHOLD);
    let edges = hysteresis(&classes);

    log::debug!(
        "canny: {}x{} -> {} edge pixels",
        input.dim().1,
        input.dim().0,
        count_edge_pixels(edges.view())
    );

    edges
}

/// Number of pixels whose first channel is set.
pub fn count_edge_pixels(edges: ArrayView3<u8>) -> usize {
    edges
        .outer_iter()
        .map(|row| row.outer_iter().filter(|px| px[0] > 0).count())
        .sum()
}
