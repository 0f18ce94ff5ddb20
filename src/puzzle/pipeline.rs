//! Puzzle orchestrator.
//!
//! Runs the stages in order on a decoded RGBA raster:
//!
//! 1. Downscale to the `max_dimension` bound
//! 2. Grayscale
//! 3. Canny edge detection
//! 4. Contour tracing (longest outline only)
//! 5. Dot placement
//! 6. Numbering
//!
//! and finally maps every dot back to the original image's coordinate space.
//! An image without a usable outline is a successful run with no dots.

use ndarray::ArrayView3;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::PuzzleError;
use crate::filters::core::ensure_rgba;
use crate::filters::edge::canny_edges_u8;
use crate::filters::grayscale::grayscale_rgba_u8;
use crate::filters::resize::{downscale_area_u8, downscale_factor, scaled_dimensions};
use crate::selection::extract_contours;

use super::numbering::{assign_numbers, NumberedPoint};
use super::options::PuzzleOptions;
use super::placement::place_points;

/// Width and height of the caller's image, before any downscaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

/// Numbered dots in original-image coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResult {
    pub points: Vec<NumberedPoint>,
    pub original_size: ImageSize,
}

impl PuzzleResult {
    fn empty(original_size: ImageSize) -> Self {
        Self {
            points: Vec::new(),
            original_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Flat layout for FFI consumers: `[n, x1, y1, number1, ..., width, height]`.
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(1 + self.points.len() * 3 + 2);
        flat.push(self.points.len() as f64);
        for p in &self.points {
            flat.push(p.x);
            flat.push(p.y);
            flat.push(p.number as f64);
        }
        flat.push(self.original_size.width as f64);
        flat.push(self.original_size.height as f64);
        flat
    }
}

/// Generate a puzzle from an RGBA image.
///
/// # Arguments
/// * `image` - RGBA image of shape (height, width, 4)
/// * `options` - Difficulty, start position and working resolution
///
/// # Returns
/// Numbered dots and the original image size. The dot list is empty when no
/// outline of at least 50 pixels is found.
pub fn generate_puzzle(
    image: ArrayView3<u8>,
    options: &PuzzleOptions,
) -> Result<PuzzleResult, PuzzleError> {
    generate_puzzle_with_progress(image, options, |_, _| {})
}

/// [`generate_puzzle`] with a progress callback.
///
/// `on_progress` receives `(percent, message)` at fixed checkpoints. The
/// percentages never decrease and the last call is always `(100, "Done")`
/// for a successful run.
pub fn generate_puzzle_with_progress<F>(
    image: ArrayView3<u8>,
    options: &PuzzleOptions,
    mut on_progress: F,
) -> Result<PuzzleResult, PuzzleError>
where
    F: FnMut(u8, &str),
{
    ensure_rgba(&image)?;
    options.validate()?;

    let mut report = |percent: u8, message: &str| {
        log::debug!("puzzle: {}% {}", percent, message);
        on_progress(percent, message);
    };

    let (height, width, _) = image.dim();
    let original_size = ImageSize { width, height };

    report(10, "Loading image");
    if width == 0 || height == 0 {
        report(100, "Done");
        return Ok(PuzzleResult::empty(original_size));
    }

    report(20, "Preparing image");
    let scale = downscale_factor(width, height, options.max_dimension);
    let (work_width, work_height) = scaled_dimensions(width, height, scale);
    let working = downscale_area_u8(image, work_width, work_height);
    log::debug!(
        "puzzle: working raster {}x{} (scale {:.4}) from {}x{}",
        work_width,
        work_height,
        scale,
        width,
        height
    );

    report(30, "Analyzing image");
    let gray = grayscale_rgba_u8(working.view());

    report(50, "Finding edges");
    let edges = canny_edges_u8(gray.view());

    report(60, "Extracting outline");
    let contours = extract_contours(edges.view());

    report(70, "Placing dots");
    let placed = place_points(&contours, options.difficulty);

    report(90, "Numbering dots");
    let numbered = assign_numbers(&placed, options.start_position);

    let points = numbered
        .into_iter()
        .map(|p| NumberedPoint {
            x: p.x / scale,
            y: p.y / scale,
            number: p.number,
        })
        .collect();

    report(100, "Done");
    Ok(PuzzleResult {
        points,
        original_size,
    })
}

/// Generate puzzles for several images in parallel.
///
/// Each image runs its own single-threaded pipeline; results come back in
/// input order.
pub fn generate_batch(
    images: &[ArrayView3<u8>],
    options: &PuzzleOptions,
) -> Vec<Result<PuzzleResult, PuzzleError>> {
    images
        .par_iter()
        .map(|image| generate_puzzle(image.view(), options))
        .collect()
}
