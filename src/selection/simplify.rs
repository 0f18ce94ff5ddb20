//! Douglas-Peucker polyline simplification.
//!
//! Larger epsilon keeps fewer points. The first and last input points are
//! always retained, and the output preserves input order.

/// A 2D point with sub-pixel precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Perpendicular distance from this point to the infinite line through
    /// `line_start` and `line_end`.
    ///
    /// Falls back to the distance to `line_start` when both ends coincide.
    pub fn distance_to_line(&self, line_start: &Point, line_end: &Point) -> f64 {
        let dx = line_end.x - line_start.x;
        let dy = line_end.y - line_start.y;

        if dx == 0.0 && dy == 0.0 {
            return self.distance_to(line_start);
        }

        let numerator =
            (dy * self.x - dx * self.y + line_end.x * line_start.y - line_end.y * line_start.x).abs();
        numerator / (dx * dx + dy * dy).sqrt()
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

/// Simplify a polyline using the Douglas-Peucker algorithm.
///
/// # Arguments
/// * `points` - Input polyline points
/// * `epsilon` - Maximum allowed perpendicular distance
///
/// # Returns
/// Simplified polyline. Inputs with two or fewer points come back unchanged.
pub fn douglas_peucker(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let first = &points[0];
    let last = &points[points.len() - 1];

    // Strict comparison keeps the first of equally distant points
    let mut max_dist = 0.0f64;
    let mut max_idx = 0;

    for (i, point) in points.iter().enumerate().skip(1).take(points.len() - 2) {
        let dist = point.distance_to_line(first, last);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }

    if max_dist > epsilon {
        let mut left = douglas_peucker(&points[..=max_idx], epsilon);
        let right = douglas_peucker(&points[max_idx..], epsilon);

        // Split point is the tail of `left` and the head of `right`
        left.pop();
        left.extend(right);
        left
    } else {
        vec![*first, *last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance_to(&p2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_line_is_unclamped() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(2.0, 0.0);
        // Beyond the segment end, still measured to the infinite line
        let p = Point::new(5.0, 3.0);
        assert!((p.distance_to_line(&start, &end) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_degenerate_line() {
        let a = Point::new(1.0, 1.0);
        let p = Point::new(4.0, 5.0);
        assert!((p.distance_to_line(&a, &a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_short_inputs_unchanged() {
        assert!(douglas_peucker(&[], 1.0).is_empty());
        let one = pts(&[(1.0, 2.0)]);
        assert_eq!(douglas_peucker(&one, 1.0), one);
        let two = pts(&[(1.0, 2.0), (9.0, 9.0)]);
        assert_eq!(douglas_peucker(&two, 0.0), two);
    }

    #[test]
    fn test_collinear_points_collapse() {
        let line = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let result = douglas_peucker(&line, 0.5);
        assert_eq!(result, pts(&[(0.0, 0.0), (4.0, 4.0)]));
    }

    #[test]
    fn test_corner_is_kept() {
        let l_shape = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 5.0), (10.0, 10.0)]);
        let result = douglas_peucker(&l_shape, 1.0);
        assert_eq!(result, pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
    }

    #[test]
    fn test_endpoints_always_present() {
        let zigzag = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, -3.0), (3.0, 3.0), (4.0, 0.5)]);
        for epsilon in [0.0, 0.5, 2.0, 10.0] {
            let result = douglas_peucker(&zigzag, epsilon);
            assert_eq!(result.first(), zigzag.first());
            assert_eq!(result.last(), zigzag.last());
        }
    }

    #[test]
    fn test_resimplifying_is_idempotent() {
        let wave: Vec<Point> = (0..200)
            .map(|i| {
                let x = i as f64;
                Point::new(x, (x / 9.0).sin() * 20.0)
            })
            .collect();

        let once = douglas_peucker(&wave, 3.0);
        let twice = douglas_peucker(&once, 3.0);
        assert_eq!(once, twice);
        assert!(once.len() < wave.len());
    }

    #[test]
    fn test_tie_splits_at_first_occurrence() {
        // Both interior points sit 2.0 above the chord
        let input = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 2.0), (3.0, 0.0)]);
        let result = douglas_peucker(&input, 1.9);
        assert_eq!(result, pts(&[(0.0, 0.0), (1.0, 2.0), (3.0, 0.0)]));

        let closed = pts(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (-2.0, 0.0), (0.0, 0.0)]);
        // Distances to the zero-length chord are all 2.0; first one wins
        let collapsed = douglas_peucker(&closed, 1.0);
        assert_eq!(collapsed[1], Point::new(2.0, 0.0));
    }
}
