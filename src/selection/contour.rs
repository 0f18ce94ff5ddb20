//! Outline extraction from a binary edge map.
//!
//! Walks edge pixels with Moore-neighborhood tracing and keeps only the
//! single longest component. Point order is the order of the walk, which is
//! what lets the numbering stage follow the outline instead of jumping
//! around spatially.

use ndarray::ArrayView3;

/// Components with fewer points than this are treated as noise.
pub const MIN_CONTOUR_POINTS: usize = 50;

/// Pixel value above which an edge-map sample counts as foreground.
const FOREGROUND_THRESHOLD: u8 = 128;

/// Moore neighborhood directions (8-connected, clockwise from east)
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),   // 0: east
    (1, 1),   // 1: south-east
    (0, 1),   // 2: south
    (-1, 1),  // 3: south-west
    (-1, 0),  // 4: west
    (-1, -1), // 5: north-west
    (0, -1),  // 6: north
    (1, -1),  // 7: north-east
];

/// An ordered walk of edge pixels.
///
/// Consecutive points differ by at most 1 in each axis. A walk may revisit
/// pixels when it has to back out of a dead-end spur.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    /// Pixel coordinates as (x, y)
    pub points: Vec<(usize, usize)>,
    /// Number of points in the walk
    pub length: usize,
}

impl Contour {
    pub fn new(points: Vec<(usize, usize)>) -> Self {
        let length = points.len();
        Self { points, length }
    }
}

/// Extract the longest outline from an edge map.
///
/// # Arguments
/// * `edges` - Edge raster of shape (height, width, channels); channel 0 is
///   compared against 128
///
/// # Returns
/// Zero or one contour. Empty when no component reaches
/// [`MIN_CONTOUR_POINTS`].
pub fn extract_contours(edges: ArrayView3<u8>) -> Vec<Contour> {
    let (height, width, _) = edges.dim();
    let binary: Vec<bool> = edges
        .outer_iter()
        .flat_map(|row| {
            row.outer_iter()
                .map(|px| px[0] > FOREGROUND_THRESHOLD)
                .collect::<Vec<_>>()
        })
        .collect();

    let components = trace_components(&binary, width, height);

    // Ties keep the earliest component in scan order
    let longest = components.into_iter().fold(None::<Contour>, |best, c| match best {
        Some(b) if b.length >= c.length => Some(b),
        _ => Some(c),
    });

    match longest {
        Some(contour) => {
            log::debug!("contour: longest outline has {} points", contour.length);
            vec![contour]
        }
        None => {
            log::debug!("contour: no component reached {} points", MIN_CONTOUR_POINTS);
            Vec::new()
        }
    }
}

/// Trace every component that survives the noise filter, in scan order.
fn trace_components(binary: &[bool], width: usize, height: usize) -> Vec<Contour> {
    let mut visited = vec![false; width * height];
    let mut contours = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            if !binary[idx] || visited[idx] {
                continue;
            }

            let points = trace_boundary(binary, &mut visited, width, height, (x, y), width * height);
            if points.len() >= MIN_CONTOUR_POINTS {
                contours.push(Contour::new(points));
            } else {
                log::trace!(
                    "contour: dropped {}-point component at ({}, {})",
                    points.len(),
                    x,
                    y
                );
            }
        }
    }

    contours
}

/// Walk one boundary with Moore neighbor tracing.
///
/// The search at each step starts one position counter-clockwise of the
/// direction we arrived from. Every pixel stepped on is marked visited so
/// the outer scan never starts a new trace there. The walk ends on return to
/// `start`, at a dead end, or after `max_steps` moves.
fn trace_boundary(
    binary: &[bool],
    visited: &mut [bool],
    width: usize,
    height: usize,
    start: (usize, usize),
    max_steps: usize,
) -> Vec<(usize, usize)> {
    let (start_x, start_y) = start;
    let mut points = Vec::new();
    let (mut x, mut y) = start;
    let mut direction = 0usize;
    let mut steps = 0usize;

    loop {
        visited[y * width + x] = true;
        points.push((x, y));

        let mut found = false;
        for i in 0..8 {
            let check_dir = (direction + 7 + i) % 8;
            let (dx, dy) = DIRECTIONS[check_dir];
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;

            if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                continue;
            }

            if binary[ny as usize * width + nx as usize] {
                x = nx as usize;
                y = ny as usize;
                direction = check_dir;
                found = true;
                break;
            }
        }

        if !found {
            break;
        }

        steps += 1;
        if x == start_x && y == start_y {
            break;
        }
        if steps >= max_steps {
            // Partial walk is kept as-is
            log::warn!(
                "contour: trace from ({}, {}) hit the {}-step bound with {} points",
                start_x,
                start_y,
                max_steps,
                points.len()
            );
            break;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn blank(height: usize, width: usize) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((height, width, 4));
        img.slice_mut(ndarray::s![.., .., 3]).fill(255);
        img
    }

    fn set(img: &mut Array3<u8>, x: usize, y: usize) {
        img[[y, x, 0]] = 255;
        img[[y, x, 1]] = 255;
        img[[y, x, 2]] = 255;
    }

    fn rect_outline(img: &mut Array3<u8>, x0: usize, y0: usize, x1: usize, y1: usize) {
        for x in x0..=x1 {
            set(img, x, y0);
            set(img, x, y1);
        }
        for y in y0..=y1 {
            set(img, x0, y);
            set(img, x1, y);
        }
    }

    fn assert_moore_connected(contour: &Contour) {
        for pair in contour.points.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            assert!((ax as i64 - bx as i64).abs() <= 1, "{:?}", pair);
            assert!((ay as i64 - by as i64).abs() <= 1, "{:?}", pair);
        }
    }

    #[test]
    fn test_rectangle_outline_gives_one_contour() {
        let mut img = blank(50, 50);
        rect_outline(&mut img, 5, 5, 30, 30);

        let contours = extract_contours(img.view());

        assert_eq!(contours.len(), 1);
        let contour = &contours[0];
        assert_eq!(contour.length, contour.points.len());
        // 26 pixels per side, corners shared
        assert_eq!(contour.length, 100);
        assert_eq!(contour.points[0], (5, 5));
        assert_moore_connected(contour);
    }

    #[test]
    fn test_rectangle_walk_order() {
        let mut img = blank(50, 50);
        rect_outline(&mut img, 5, 5, 30, 30);

        let contour = &extract_contours(img.view())[0];

        // East along the top edge first, then down the right side
        assert_eq!(contour.points[1], (6, 5));
        assert_eq!(contour.points[25], (30, 5));
        assert_eq!(contour.points[26], (30, 6));
        assert_eq!(*contour.points.last().unwrap(), (5, 6));
    }

    #[test]
    fn test_longest_contour_wins() {
        let mut img = blank(80, 80);
        rect_outline(&mut img, 5, 5, 35, 35);
        rect_outline(&mut img, 50, 50, 65, 65);

        let contours = extract_contours(img.view());

        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].length, 120);
        assert_eq!(contours[0].points[0], (5, 5));
    }

    #[test]
    fn test_small_blobs_are_noise() {
        let mut img = blank(20, 20);
        set(&mut img, 5, 5);
        set(&mut img, 7, 8);
        set(&mut img, 12, 3);
        rect_outline(&mut img, 2, 12, 8, 16);

        assert!(extract_contours(img.view()).is_empty());
    }

    #[test]
    fn test_exactly_min_points_is_kept() {
        let mut img = blank(40, 40);
        // 14 x 13 outline: 2 * (14 + 13) - 4 = 50 pixels
        rect_outline(&mut img, 5, 5, 18, 17);

        let contours = extract_contours(img.view());

        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].length, MIN_CONTOUR_POINTS);
    }

    #[test]
    fn test_one_below_min_points_is_noise() {
        let mut img = blank(40, 40);
        rect_outline(&mut img, 5, 5, 18, 17);
        // Cut the top-left corner so the outline closes diagonally on 49 pixels
        img[[5, 5, 0]] = 0;
        img[[5, 5, 1]] = 0;
        img[[5, 5, 2]] = 0;

        let binary: Vec<bool> = img
            .outer_iter()
            .flat_map(|row| row.outer_iter().map(|px| px[0] > 128).collect::<Vec<_>>())
            .collect();
        let mut visited = vec![false; 40 * 40];
        let walk = trace_boundary(&binary, &mut visited, 40, 40, (6, 5), 40 * 40);
        assert_eq!(walk.len(), MIN_CONTOUR_POINTS - 1);

        assert!(extract_contours(img.view()).is_empty());
    }

    #[test]
    fn test_blank_image_is_empty() {
        let img = blank(10, 10);
        assert!(extract_contours(img.view()).is_empty());
    }

    #[test]
    fn test_threshold_is_strictly_above_128() {
        let mut img = blank(40, 40);
        for x in 2..=37 {
            for y in [2, 37] {
                img[[y, x, 0]] = 128;
            }
        }
        for y in 2..=37 {
            for x in [2, 37] {
                img[[y, x, 0]] = 128;
            }
        }

        assert!(extract_contours(img.view()).is_empty());
    }

    #[test]
    fn test_open_line_walks_to_its_end() {
        let mut img = blank(10, 70);
        for x in 3..63 {
            set(&mut img, x, 4);
        }

        let contours = extract_contours(img.view());

        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points[0], (3, 4));
        assert_moore_connected(&contours[0]);
    }

    #[test]
    fn test_two_pixels_return_to_start() {
        let binary = vec![true, true, false, false];
        let mut visited = vec![false; 4];

        let points = trace_boundary(&binary, &mut visited, 4, 1, (0, 0), 4);

        assert_eq!(points, vec![(0, 0), (1, 0)]);
        assert!(visited[0] && visited[1]);
        assert!(!visited[2]);
    }

    #[test]
    fn test_step_bound_keeps_partial_walk() {
        let binary = vec![true; 10];
        let mut visited = vec![false; 10];

        let points = trace_boundary(&binary, &mut visited, 10, 1, (0, 0), 5);

        assert_eq!(points, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert!(visited[4]);
        assert!(!visited[5]);
    }

    #[test]
    fn test_isolated_pixel_stops_immediately() {
        let binary = vec![false, false, false, false, true, false, false, false, false];
        let mut visited = vec![false; 9];

        let points = trace_boundary(&binary, &mut visited, 3, 3, (1, 1), 9);

        assert_eq!(points, vec![(1, 1)]);
    }
}
