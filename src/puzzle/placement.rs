//! Dot placement: difficulty-tuned simplification plus minimum spacing.
//!
//! Difficulty maps linearly onto the Douglas-Peucker tolerance:
//!
//! | Difficulty | Epsilon | Result |
//! |------------|---------|--------|
//! | 0 | 50.0 | few dots |
//! | 50 | 27.5 | moderate |
//! | 100 | 5.0 | many dots |
//!
//! After simplification a greedy forward pass drops any dot closer than
//! [`MIN_POINT_SPACING`] to a dot already kept, so printed numbers do not
//! overlap.

use crate::selection::{douglas_peucker, Contour, Point};

/// Tolerance at difficulty 0
pub const EASIEST_EPSILON: f64 = 50.0;
/// Tolerance at difficulty 100
pub const HARDEST_EPSILON: f64 = 5.0;
/// Minimum distance between any two kept dots, in working pixels
pub const MIN_POINT_SPACING: f64 = 20.0;

/// A dot on the outline, tagged with the contour it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPoint {
    pub x: f64,
    pub y: f64,
    pub contour_id: usize,
}

impl PlacedPoint {
    pub fn distance_to(&self, other: &PlacedPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Simplification tolerance for a difficulty in 0-100 (larger values clamp to 100).
pub fn difficulty_to_epsilon(difficulty: u8) -> f64 {
    let difficulty = difficulty.min(100) as f64;
    EASIEST_EPSILON - (difficulty / 100.0) * (EASIEST_EPSILON - HARDEST_EPSILON)
}

/// Turn traced contours into spaced puzzle dots.
///
/// Each contour is simplified on its own and its surviving points are
/// tagged with the contour's index. Spacing is enforced across all contours
/// in order.
pub fn place_points(contours: &[Contour], difficulty: u8) -> Vec<PlacedPoint> {
    let epsilon = difficulty_to_epsilon(difficulty);

    let mut all_points = Vec::new();
    for (contour_id, contour) in contours.iter().enumerate() {
        let polyline: Vec<Point> = contour.points.iter().map(|&p| Point::from(p)).collect();
        let simplified = douglas_peucker(&polyline, epsilon);

        log::debug!(
            "placement: contour {} simplified {} -> {} points (epsilon {:.1})",
            contour_id,
            polyline.len(),
            simplified.len(),
            epsilon
        );

        all_points.extend(simplified.into_iter().map(|p| PlacedPoint {
            x: p.x,
            y: p.y,
            contour_id,
        }));
    }

    let spaced = enforce_min_spacing(&all_points, MIN_POINT_SPACING);
    log::debug!("placement: {} dots after spacing", spaced.len());
    spaced
}

/// Greedy, order-preserving spacing filter.
///
/// The first point is always kept; each later point is kept only if it is at
/// least `min_distance` from every point kept so far. Quadratic in the number
/// of kept points, which is small after simplification.
pub fn enforce_min_spacing(points: &[PlacedPoint], min_distance: f64) -> Vec<PlacedPoint> {
    let mut kept: Vec<PlacedPoint> = Vec::with_capacity(points.len());

    for point in points {
        if kept.iter().all(|existing| point.distance_to(existing) >= min_distance) {
            kept.push(*point);
        }
    }

    kept
}
