//! Outline selection algorithms.
//!
//! - **Contour extraction**: Moore-neighborhood tracing of the longest edge walk
//! - **Simplification**: Douglas-Peucker reduction of a traced walk

pub mod contour;
pub mod simplify;

pub use contour::{extract_contours, Contour};
pub use simplify::{douglas_peucker, Point};
