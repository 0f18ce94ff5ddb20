//! WebAssembly exports for DotStag.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images are
//! passed as the flat RGBA bytes of a browser `ImageData`.

use wasm_bindgen::prelude::*;

use crate::error::PuzzleError;
use crate::filters::core::rgba_from_raw;
use crate::filters::edge::canny_edges_u8;
use crate::filters::grayscale::grayscale_rgba_u8;
use crate::puzzle::{generate_puzzle, PuzzleOptions, StartPosition};

fn to_js_err(err: PuzzleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Puzzle Generation
// ============================================================================

/// Generate a connect-the-dots puzzle from RGBA bytes.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `difficulty` - 0 (few dots) to 100 (many dots)
/// * `start_position` - "top-left", "top-right" or "center"
/// * `max_dimension` - Longest side of the working raster
///
/// # Returns
/// `[n, x1, y1, number1, ..., xn, yn, numbern, width, height]`
#[wasm_bindgen]
pub fn generate_puzzle_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    difficulty: u8,
    start_position: &str,
    max_dimension: u32,
) -> Result<Vec<f64>, JsValue> {
    let options = PuzzleOptions {
        difficulty,
        start_position: start_position.parse::<StartPosition>().map_err(to_js_err)?,
        max_dimension,
    };
    let input = rgba_from_raw(data.to_vec(), width, height).map_err(to_js_err)?;

    let result = generate_puzzle(input.view(), &options).map_err(to_js_err)?;
    Ok(result.to_flat())
}

// ============================================================================
// Pipeline Stages
// ============================================================================

/// Convert RGBA bytes to grayscale (BT.601 luma, alpha 255).
#[wasm_bindgen]
pub fn grayscale_rgba_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    let input = rgba_from_raw(data.to_vec(), width, height).map_err(to_js_err)?;
    let result = grayscale_rgba_u8(input.view());
    Ok(result.into_raw_vec_and_offset().0)
}

/// Canny edge map of RGBA bytes (edge pixels 255, others 0).
#[wasm_bindgen]
pub fn canny_edges_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    let input = rgba_from_raw(data.to_vec(), width, height).map_err(to_js_err)?;
    let result = canny_edges_u8(input.view());
    Ok(result.into_raw_vec_and_offset().0)
}
