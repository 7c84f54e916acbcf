use crate::entities::{OccupiedRegion, Outline, Part, RegionKind, Sheet};
use crate::geometry::Rotation;
use crate::geometry::primitives::Rect;
use crate::io::ext_repr::{PartDescriptor, RegionDescriptor, SheetDescriptor, Unit};
use crate::io::svg::extract_points;
use log::warn;

/// Conversion factor applied to dimensions expressed in meters.
pub const METERS_TO_INCHES: f32 = 39.3701;
/// Placeholder dimension for parts without any resolvable dimension.
pub const FALLBACK_DIM: f32 = 2.0;
/// Outline path data is expressed in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Builds a [`Part`] from its descriptor.
///
/// Resolves each axis through the descriptor's dimension cascade, applies the
/// unit policy and derives dimensions from the outline path when no explicit
/// width was supplied. Parts without any resolvable dimension get a
/// [`FALLBACK_DIM`] placeholder footprint, callers should treat those results
/// as degraded rather than silently correct.
pub fn part_from_descriptor(ext: &PartDescriptor, idx: usize) -> Part {
    let id = ext.id.unwrap_or(idx as u64);

    let width = resolve_dim(&[ext.width, ext.layout_x, ext.bounding_box_x]);
    let height = resolve_dim(&[ext.height, ext.layout_y, ext.bounding_box_y]);
    if width.is_none() || height.is_none() {
        warn!(
            "[IMPORT] part {id} has no resolvable {}, using {FALLBACK_DIM}\" placeholder",
            match (width, height) {
                (None, None) => "dimensions",
                (None, _) => "width",
                (_, None) => "height",
                (Some(_), Some(_)) => unreachable!(),
            }
        );
    }
    let mut width = width.unwrap_or(FALLBACK_DIM);
    let mut height = height.unwrap_or(FALLBACK_DIM);

    let meters = match ext.unit {
        Some(Unit::Meters) => true,
        Some(Unit::Inches) => false,
        None => {
            let assumed = width < 1.0 && height < 1.0;
            if assumed {
                warn!(
                    "[IMPORT] part {id} has untagged dimensions {width}x{height} below 1.0, assuming meters"
                );
            }
            assumed
        }
    };
    if meters {
        width *= METERS_TO_INCHES;
        height *= METERS_TO_INCHES;
    }

    // The outline path only kicks in when no explicit width was given.
    let explicit_width = ext.width.is_some_and(|w| w > 0.0);
    if !explicit_width
        && let Some(path) = ext.svg_path.as_deref().filter(|p| !p.is_empty())
    {
        match Rect::bounding_points(&extract_points(path)) {
            Some(bounds) => {
                let (w, h) = (
                    bounds.width() / POINTS_PER_INCH,
                    bounds.height() / POINTS_PER_INCH,
                );
                if w > 0.0 && h > 0.0 {
                    (width, height) = (w, h);
                } else {
                    warn!(
                        "[IMPORT] outline path of part {id} has a degenerate bounding box, keeping {width}x{height}"
                    );
                }
            }
            None => {
                warn!(
                    "[IMPORT] outline path of part {id} has no coordinate pairs, keeping {width}x{height}"
                );
            }
        }
    }

    Part {
        id,
        name: ext.name.clone(),
        width,
        height,
        outline: Outline::BoundingRect { width, height },
        quantity: ext.quantity.filter(|&q| q > 0).unwrap_or(1),
    }
}

/// Builds a [`Sheet`] from its descriptor.
/// Missing remaining area defaults to the full sheet area.
pub fn sheet_from_descriptor(ext: &SheetDescriptor, idx: usize) -> Sheet {
    let id = ext.id.unwrap_or(idx as u64);
    let width = finite_or_zero(ext.width, "width", id);
    let height = finite_or_zero(ext.height, "height", id);
    let remaining_area = ext
        .remaining_area
        .filter(|a| a.is_finite() && *a > 0.0)
        .unwrap_or(width * height);
    Sheet {
        id,
        width,
        height,
        remaining_area,
    }
}

/// Builds an [`OccupiedRegion`] from a caller-supplied cut region.
///
/// Missing fields default to zero and negative extents are clamped, zero-size
/// regions stay in the occupied set since they still constrain clearance.
/// Rotations that are not quarter turns snap to 0.
pub fn region_from_descriptor(ext: &RegionDescriptor) -> OccupiedRegion {
    let x = if ext.x.is_finite() { ext.x } else { 0.0 };
    let y = if ext.y.is_finite() { ext.y } else { 0.0 };
    let width = sanitize_extent(ext.width);
    let height = sanitize_extent(ext.height);
    let rotation = match ext.rotation {
        None => Rotation::R0,
        Some(degrees) => Rotation::from_degrees(degrees).unwrap_or_else(|| {
            warn!("[IMPORT] cut region rotation {degrees} is not a quarter turn, snapping to 0");
            Rotation::R0
        }),
    };
    OccupiedRegion {
        rect: Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        },
        rotation,
        kind: RegionKind::ExistingCut,
    }
}

/// First dimension source that is present, finite and positive.
/// Zero and negative values fall through to the next source.
fn resolve_dim(sources: &[Option<f32>]) -> Option<f32> {
    sources
        .iter()
        .find_map(|source| source.filter(|v| v.is_finite() && *v > 0.0))
}

fn sanitize_extent(v: f32) -> f32 {
    match v.is_finite() {
        true => v.max(0.0),
        false => 0.0,
    }
}

fn finite_or_zero(v: f32, field: &str, sheet_id: u64) -> f32 {
    if v.is_finite() {
        v
    } else {
        warn!("[IMPORT] sheet {sheet_id} {field} is not finite, using 0");
        0.0
    }
}
