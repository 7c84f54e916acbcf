use crate::entities::{OccupiedRegion, Placement, RegionKind, Sheet};
use crate::util::FPA;

//Various checks to verify the correctness of the occupied set and layouts.
//Used in debug_assert!() blocks and reused by the integration tests.

/// Every region produced by this run must clear all other regions by `spacing`.
/// Caller-supplied regions are allowed to conflict among themselves.
pub fn new_parts_clear_spacing(regions: &[OccupiedRegion], spacing: f32) -> bool {
    regions
        .iter()
        .enumerate()
        .filter(|(_, r)| r.kind == RegionKind::NewPart)
        .all(|(i, r)| {
            regions
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .all(|(_, other)| !r.rect.clearance_conflict(&other.rect, spacing))
        })
}

/// Every placement must lie within the margin-adjusted sheet bounds.
pub fn placements_within_bounds(placements: &[Placement], sheet: &Sheet, margin: f32) -> bool {
    placements.iter().all(|p| {
        let rect = p.rect();
        FPA(rect.x_min) >= FPA(margin)
            && FPA(rect.y_min) >= FPA(margin)
            && FPA(rect.x_max) <= FPA(sheet.width - margin)
            && FPA(rect.y_max) <= FPA(sheet.height - margin)
    })
}
