use crate::entities::{Part, Placement};
use crate::geometry::Rotation;
use crate::geometry::primitives::Point;

/// A rectangle cut from a sheet by one placement, kept as a polygon with
/// part linkage for export and for the cumulative master drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct CutArea {
    pub part_id: u64,
    pub part_name: Option<String>,
    /// Lower-left corner in absolute sheet coordinates.
    pub x: f32,
    pub y: f32,
    /// Post-rotation footprint.
    pub width: f32,
    pub height: f32,
    pub rotation: Rotation,
    /// Corner points: lower-left, lower-right, upper-right, upper-left.
    pub polygon: Vec<Point>,
}

impl CutArea {
    pub fn from_placement(p: &Placement) -> Self {
        CutArea {
            part_id: p.part.id,
            part_name: p.part.name.clone(),
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            rotation: p.rotation,
            polygon: vec![
                Point(p.x, p.y),
                Point(p.x + p.width, p.y),
                Point(p.x + p.width, p.y + p.height),
                Point(p.x, p.y + p.height),
            ],
        }
    }
}

/// Aggregate result of a single nesting run.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub placements: Vec<Placement>,
    /// Parts that could not be placed in any rotation or position.
    /// Non-empty is a normal outcome, not an error.
    pub failed_parts: Vec<Part>,
    /// Sum of the post-rotation footprints of all placements.
    pub total_area_used: f32,
    /// `total_area_used` divided by the full sheet area.
    pub efficiency: f32,
    /// Sheet area net of placements and caller-supplied cut regions.
    pub remaining_area: f32,
    pub new_cut_areas: Vec<CutArea>,
}

impl Layout {
    pub fn utilization_percent(&self) -> f32 {
        self.efficiency * 100.0
    }

    /// True iff every requested part was placed.
    pub fn is_complete(&self) -> bool {
        self.failed_parts.is_empty()
    }
}
