use crate::geometry::primitives::{Point, Rect};

/// Default clearance radius around an outline's true geometry.
pub const DEFAULT_CLEARANCE_RADIUS: f32 = 0.05;

/// SVG path command letters, upper and lower case.
const COMMANDS: &[char] = &[
    'M', 'L', 'H', 'V', 'C', 'S', 'Q', 'T', 'A', 'Z', 'm', 'l', 'h', 'v', 'c', 's', 'q', 't', 'a',
    'z',
];

/// Coordinate pairs of path-like data, in order of appearance.
///
/// A deliberately simple parser: the data is cut at command letters, the
/// numbers behind each command are split on whitespace and commas and taken
/// as consecutive (x, y) pairs. Unparsable tokens are skipped, a trailing
/// unpaired number is dropped. Anything before the first command letter is
/// ignored.
pub fn extract_points(outline_data: &str) -> Vec<Point> {
    let start = match outline_data.find(COMMANDS) {
        Some(idx) => idx,
        None => return vec![],
    };
    let mut points = vec![];
    for segment in outline_data[start..].split(COMMANDS) {
        let params: Vec<f32> = segment
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse().ok())
            .filter(|v: &f32| v.is_finite())
            .collect();
        for pair in params.chunks_exact(2) {
            points.push(Point(pair[0], pair[1]));
        }
    }
    points
}

/// Axis-aligned bounding box over every coordinate pair in `outline_data`.
///
/// Input without a single extractable pair yields a unit box at the origin,
/// the function never fails.
pub fn extract_bounds(outline_data: &str) -> Rect {
    match Rect::bounding_points(&extract_points(outline_data)) {
        Some(bounds) => bounds,
        None => Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 1.0,
            y_max: 1.0,
        },
    }
}

/// Clearance outline around `outline_data`: its bounding box expanded by
/// `radius` on all four sides.
pub fn dilated_bounds(outline_data: &str, radius: f32) -> Rect {
    extract_bounds(outline_data).dilate(radius)
}
