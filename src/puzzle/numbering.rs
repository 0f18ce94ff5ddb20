//! Dot numbering.
//!
//! Numbers follow placement order, which follows the traced outline. The
//! start position only picks where along that cycle number 1 sits; the
//! sequence is rotated, never reordered.

use serde::{Deserialize, Serialize};

use super::options::StartPosition;
use super::placement::PlacedPoint;

/// A numbered puzzle dot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberedPoint {
    pub x: f64,
    pub y: f64,
    /// 1-based position in the connect-the-dots sequence
    pub number: u32,
}

/// Per-run values a start policy scores against.
#[derive(Clone, Copy, Debug)]
enum StartReference {
    TopLeft,
    TopRight { max_x: f64 },
    Center { cx: f64, cy: f64 },
}

impl StartReference {
    /// `points` must be non-empty.
    fn for_points(points: &[PlacedPoint], start: StartPosition) -> Self {
        match start {
            StartPosition::TopLeft => StartReference::TopLeft,
            StartPosition::TopRight => StartReference::TopRight {
                max_x: points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max),
            },
            StartPosition::Center => {
                let n = points.len() as f64;
                StartReference::Center {
                    cx: points.iter().map(|p| p.x).sum::<f64>() / n,
                    cy: points.iter().map(|p| p.y).sum::<f64>() / n,
                }
            }
        }
    }

    #[inline]
    fn score(&self, p: &PlacedPoint) -> f64 {
        match *self {
            StartReference::TopLeft => p.x + p.y,
            StartReference::TopRight { max_x } => (max_x - p.x) + p.y,
            StartReference::Center { cx, cy } => {
                let dx = p.x - cx;
                let dy = p.y - cy;
                dx * dx + dy * dy
            }
        }
    }
}

/// Index of the dot that receives number 1.
///
/// Each position scores every dot with a scalar and the lowest score wins;
/// ties keep the earliest dot.
///
/// * `TopLeft` - `x + y`
/// * `TopRight` - `(max_x - x) + y`
/// * `Center` - squared distance to the centroid
pub fn find_start_index(points: &[PlacedPoint], start: StartPosition) -> usize {
    if points.is_empty() {
        return 0;
    }

    let reference = StartReference::for_points(points, start);

    let mut best_idx = 0;
    let mut best_score = reference.score(&points[0]);
    for (i, point) in points.iter().enumerate().skip(1) {
        let s = reference.score(point);
        if s < best_score {
            best_score = s;
            best_idx = i;
        }
    }
    best_idx
}

/// Rotate the dots so the chosen start comes first, then number them 1..=N.
pub fn assign_numbers(points: &[PlacedPoint], start: StartPosition) -> Vec<NumberedPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let start_idx = find_start_index(points, start);
    log::debug!(
        "numbering: {} dots, starting at index {} ({})",
        points.len(),
        start_idx,
        start
    );

    points[start_idx..]
        .iter()
        .chain(points[..start_idx].iter())
        .enumerate()
        .map(|(i, p)| NumberedPoint {
            x: p.x,
            y: p.y,
            number: i as u32 + 1,
        })
        .collect()
}
