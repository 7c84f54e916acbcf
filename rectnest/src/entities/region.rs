use crate::geometry::Rotation;
use crate::geometry::primitives::Rect;

/// Origin of an [`OccupiedRegion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    /// Cut in a previous job, supplied by the caller.
    ExistingCut,
    /// Placed by the current nesting run.
    NewPart,
}

/// An axis-aligned rectangle already consumed on a sheet.
/// Coordinates are in margin-adjusted sheet space, lower-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupiedRegion {
    pub rect: Rect,
    pub rotation: Rotation,
    pub kind: RegionKind,
}
