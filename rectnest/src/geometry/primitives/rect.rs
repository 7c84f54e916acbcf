use crate::geometry::primitives::Point;

/// Axis-aligned rectangle.
/// Zero-extent rectangles are allowed: callers can supply degenerate cut
/// regions, and these still take part in clearance checks.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    /// Returns the smallest rectangle containing every point in `points`,
    /// or `None` if `points` is empty.
    pub fn bounding_points(points: &[Point]) -> Option<Self> {
        let Point(mut x_min, mut y_min) = *points.first()?;
        let (mut x_max, mut y_max) = (x_min, y_min);
        for &Point(x, y) in &points[1..] {
            x_min = f32::min(x_min, x);
            y_min = f32::min(y_min, y);
            x_max = f32::max(x_max, x);
            y_max = f32::max(y_max, y);
        }
        Some(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Returns a new rectangle expanded by `radius` on all four sides.
    pub fn dilate(&self, radius: f32) -> Rect {
        Rect {
            x_min: self.x_min - radius,
            y_min: self.y_min - radius,
            x_max: self.x_max + radius,
            y_max: self.y_max + radius,
        }
    }

    /// Returns true iff `other` lies entirely inside `self`, allowing
    /// `tolerance` of overhang on every side.
    pub fn contains(&self, other: &Rect, tolerance: f32) -> bool {
        self.x_min - tolerance <= other.x_min
            && self.y_min - tolerance <= other.y_min
            && self.x_max + tolerance >= other.x_max
            && self.y_max + tolerance >= other.y_max
    }

    /// Returns true iff `self` and `other` are closer than `gap` on both axes.
    /// Two rectangles exactly `gap` apart are clear of each other.
    #[inline(always)]
    pub fn clearance_conflict(&self, other: &Rect, gap: f32) -> bool {
        self.x_max + gap > other.x_min
            && other.x_max + gap > self.x_min
            && self.y_max + gap > other.y_min
            && other.y_max + gap > self.y_min
    }
}
