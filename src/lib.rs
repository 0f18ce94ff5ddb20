//! DotStag
//!
//! Turns a raster image into a connect-the-dots puzzle: an ordered, numbered
//! list of dots that traces the image's dominant outline. Python bindings via
//! PyO3 and WASM bindings for JavaScript are available behind features.
//!
//! ## Image Format
//! Images are `ndarray` arrays of shape (height, width, 4), RGBA `u8`
//! (0-255). Intermediate rasters (grayscale, edge map) keep the same layout.
//!
//! ## Pipeline
//! downscale -> grayscale -> Canny edges -> Moore contour trace ->
//! Douglas-Peucker placement -> numbering -> rescale to original size.
//!
//! ```no_run
//! use dotstag::{generate_puzzle, PuzzleOptions};
//! use ndarray::Array3;
//!
//! let image = Array3::<u8>::from_elem((300, 400, 4), 255);
//! let puzzle = generate_puzzle(image.view(), &PuzzleOptions::default())?;
//! for dot in &puzzle.points {
//!     println!("{} at ({:.1}, {:.1})", dot.number, dot.x, dot.y);
//! }
//! # Ok::<(), dotstag::PuzzleError>(())
//! ```

pub mod error;
pub mod filters;
pub mod puzzle;
pub mod selection;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ConfigError, PuzzleError};
pub use puzzle::{
    generate_batch, generate_puzzle, generate_puzzle_with_progress, ImageSize, NumberedPoint,
    PuzzleOptions, PuzzleResult, StartPosition,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::PuzzleError;
    use crate::filters::edge::canny_edges_u8;
    use crate::filters::grayscale::grayscale_rgba_u8;
    use crate::puzzle::{PuzzleOptions, StartPosition};

    fn to_py_err(err: PuzzleError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Puzzle Generation
    // ========================================================================

    /// Generate a connect-the-dots puzzle from an RGBA u8 image.
    ///
    /// # Arguments
    /// * `image` - RGBA image of shape (height, width, 4)
    /// * `difficulty` - 0 (few dots) to 100 (many dots)
    /// * `start_position` - "top-left", "top-right" or "center"
    /// * `max_dimension` - Longest side of the working raster
    ///
    /// # Returns
    /// `([(x, y, number), ...], (width, height))` in original image coordinates
    #[pyfunction]
    #[pyo3(signature = (image, difficulty=50, start_position="top-left", max_dimension=400))]
    pub fn generate_puzzle<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        difficulty: u8,
        start_position: &str,
        max_dimension: u32,
    ) -> PyResult<(Vec<(f64, f64, u32)>, (usize, usize))> {
        let options = PuzzleOptions {
            difficulty,
            start_position: start_position.parse::<StartPosition>().map_err(to_py_err)?,
            max_dimension,
        };
        let input = image.as_array();

        let result = py
            .allow_threads(|| crate::puzzle::generate_puzzle(input, &options))
            .map_err(to_py_err)?;

        let points = result.points.iter().map(|p| (p.x, p.y, p.number)).collect();
        Ok((points, (result.original_size.width, result.original_size.height)))
    }

    // ========================================================================
    // Pipeline Stages
    // ========================================================================

    /// Convert RGBA u8 image to grayscale using BT.601 luma.
    ///
    /// Output is RGBA with R=G=B=luma and alpha 255.
    #[pyfunction]
    pub fn grayscale_rgba<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        let input = image.as_array();
        let result = grayscale_rgba_u8(input);
        result.into_pyarray(py)
    }

    /// Canny edge map of an RGBA u8 image (edge pixels 255, others 0).
    #[pyfunction]
    pub fn canny_edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        let result = canny_edges_u8(image.as_array());
        result.into_pyarray(py)
    }

    /// DotStag Rust extension module
    #[pymodule]
    pub fn dotstag(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(generate_puzzle, m)?)?;

        // Pipeline stages
        m.add_function(wrap_pyfunction!(grayscale_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(canny_edges, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::dotstag;
