use crate::entities::{OccupiedRegion, Part};
use crate::geometry::Rotation;
use crate::geometry::primitives::{Point, Rect};
use crate::nesting::NestConfig;
use crate::nesting::score::{self, PlacementScore};

/// A feasible position for a part, in margin-adjusted coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub x: f32,
    pub y: f32,
    /// Footprint width after `rotation`.
    pub width: f32,
    /// Footprint height after `rotation`.
    pub height: f32,
    pub rotation: Rotation,
}

/// Exhaustively searches all rotations and anchor positions for the best
/// placement of `part`, returning it together with the number of candidates
/// that passed the bounds check.
///
/// The first candidate reaching the maximum score wins: a later candidate
/// only replaces the incumbent on a strictly greater score, so rotation and
/// anchor order are part of the observable behavior.
pub fn find_best_placement(
    part: &Part,
    regions: &[OccupiedRegion],
    usable_width: f32,
    usable_height: f32,
    config: &NestConfig,
) -> (Option<(Candidate, PlacementScore)>, usize) {
    let rotations: &[Rotation] = match config.allow_rotation {
        true => &config.rotation_angles,
        false => &[Rotation::R0],
    };

    let mut best: Option<(Candidate, PlacementScore)> = None;
    let mut n_evaluated = 0;

    let (part_width, part_height) = part.footprint();
    for &rotation in rotations {
        let (width, height) = rotation.apply_to_dims(part_width, part_height);
        if !(width <= usable_width && height <= usable_height) {
            continue;
        }
        for Point(x, y) in anchors(regions, config.spacing) {
            let in_bounds =
                x >= 0.0 && y >= 0.0 && x + width <= usable_width && y + height <= usable_height;
            if !in_bounds {
                continue;
            }
            n_evaluated += 1;
            if !is_clear(x, y, width, height, regions, config.spacing) {
                continue;
            }
            let score = score::evaluate(x, y, width, height, regions);
            if best.as_ref().is_none_or(|(_, incumbent)| score > *incumbent) {
                best = Some((
                    Candidate {
                        x,
                        y,
                        width,
                        height,
                        rotation,
                    },
                    score,
                ));
            }
        }
    }
    (best, n_evaluated)
}

/// Anchor positions in their fixed order: the origin first, then for every
/// occupied region in insertion order the point immediately right of it,
/// immediately above it and at its top-right diagonal, each offset by the
/// configured spacing.
fn anchors(regions: &[OccupiedRegion], spacing: f32) -> impl Iterator<Item = Point> {
    std::iter::once(Point(0.0, 0.0)).chain(regions.iter().flat_map(move |region| {
        let r = &region.rect;
        [
            Point(r.x_max + spacing, r.y_min),
            Point(r.x_min, r.y_max + spacing),
            Point(r.x_max + spacing, r.y_max + spacing),
        ]
    }))
}

/// A candidate is valid iff it conflicts with no occupied region under
/// spacing inflation.
fn is_clear(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    regions: &[OccupiedRegion],
    spacing: f32,
) -> bool {
    let candidate = Rect {
        x_min: x,
        y_min: y,
        x_max: x + width,
        y_max: y + height,
    };
    regions
        .iter()
        .all(|region| !candidate.clearance_conflict(&region.rect, spacing))
}
