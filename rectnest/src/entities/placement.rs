use crate::entities::Part;
use crate::geometry::Rotation;
use crate::geometry::primitives::Rect;

/// The engine's decision for a single part. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// The part this placement realizes.
    pub part: Part,
    /// Lower-left corner x in absolute sheet coordinates, margin included.
    pub x: f32,
    /// Lower-left corner y in absolute sheet coordinates, margin included.
    pub y: f32,
    /// Footprint width after applying `rotation`.
    pub width: f32,
    /// Footprint height after applying `rotation`.
    pub height: f32,
    pub rotation: Rotation,
    /// Score of the winning candidate position, higher is better.
    pub score: f32,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
