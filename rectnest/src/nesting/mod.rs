//! Bottom-left-fill placement of rectangular parts on a single sheet.

mod score;
mod search;

#[doc(inline)]
pub use score::PlacementScore;
#[doc(inline)]
pub use search::Candidate;

use crate::entities::{CutArea, Layout, OccupiedRegion, Part, Placement, RegionKind, Sheet};
use crate::geometry::Rotation;
use crate::geometry::primitives::Rect;
use crate::io::ext_repr::{PartDescriptor, RegionDescriptor, SheetDescriptor};
use crate::io::import;
use crate::util::assertions;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use thousands::Separable;

/// Configuration of a [`NestingEngine`], fixed at construction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NestConfig {
    /// Try every configured rotation angle for each part
    pub allow_rotation: bool,
    /// Rotations to try, in order
    pub rotation_angles: Vec<Rotation>,
    /// Minimum clearance between any two occupied rectangles, in inches
    pub spacing: f32,
    /// Non-placeable inset from all four sheet edges, in inches
    pub margin: f32,
}

impl Default for NestConfig {
    fn default() -> Self {
        NestConfig {
            allow_rotation: true,
            rotation_angles: Rotation::ALL.to_vec(),
            spacing: 0.1,
            margin: 0.2,
        }
    }
}

/// Places rectangular parts on a sheet with a bottom-left-fill heuristic.
///
/// Parts are tried largest first. For every part each allowed rotation and
/// anchor position is scored, the best valid candidate becomes a placement
/// and joins the occupied set that constrains all later parts. Parts that fit
/// nowhere end up in the layout's `failed_parts`, the run itself never fails.
pub struct NestingEngine {
    pub config: NestConfig,
}

impl NestingEngine {
    pub fn new(config: NestConfig) -> Result<Self> {
        ensure!(
            config.spacing.is_finite() && config.spacing >= 0.0,
            "spacing must be finite and non-negative: {}",
            config.spacing
        );
        ensure!(
            config.margin.is_finite() && config.margin >= 0.0,
            "margin must be finite and non-negative: {}",
            config.margin
        );
        Ok(NestingEngine { config })
    }

    /// Computes a non-overlapping placement of `parts` on `sheet`, avoiding
    /// `existing_cut_areas`.
    ///
    /// Placements carry absolute sheet coordinates (margin included), while
    /// `existing_cut_areas` are taken in margin-adjusted coordinates, the
    /// space the candidate search operates in.
    pub fn place(
        &self,
        parts: &[PartDescriptor],
        sheet: &SheetDescriptor,
        existing_cut_areas: &[RegionDescriptor],
    ) -> Layout {
        let sheet = import::sheet_from_descriptor(sheet, 0);
        self.place_on_sheet(parts, &sheet, existing_cut_areas)
    }

    /// [`place`](Self::place) on an already-imported [`Sheet`], id included.
    /// Selection runs this per candidate, each under its catalog index.
    pub fn place_on_sheet(
        &self,
        parts: &[PartDescriptor],
        sheet: &Sheet,
        existing_cut_areas: &[RegionDescriptor],
    ) -> Layout {
        let margin = self.config.margin;
        let usable_width = sheet.width - 2.0 * margin;
        let usable_height = sheet.height - 2.0 * margin;
        if !(usable_width > 0.0 && usable_height > 0.0) {
            warn!(
                "[NEST] sheet {} ({}x{}) has no usable space at margin {}",
                sheet.id, sheet.width, sheet.height, margin
            );
        }

        let parts: Vec<Part> = parts
            .iter()
            .enumerate()
            .map(|(idx, ext)| import::part_from_descriptor(ext, idx))
            .sorted_by_cached_key(|p| Reverse(NotNan::new(p.area()).expect("part area is NaN")))
            .collect();

        let mut regions: Vec<OccupiedRegion> = existing_cut_areas
            .iter()
            .map(import::region_from_descriptor)
            .collect();

        info!(
            "[NEST] placing {} parts on sheet {} ({}x{}, {} existing cut regions)",
            parts.len(),
            sheet.id,
            sheet.width,
            sheet.height,
            regions.len()
        );

        let mut placements: Vec<Placement> = vec![];
        let mut failed_parts: Vec<Part> = vec![];
        let mut new_cut_areas: Vec<CutArea> = vec![];
        let mut n_evaluated = 0;

        for (i, part) in parts.iter().enumerate() {
            let (best, n) = search::find_best_placement(
                part,
                &regions,
                usable_width,
                usable_height,
                &self.config,
            );
            n_evaluated += n;
            match best {
                Some((c, score)) => {
                    regions.push(OccupiedRegion {
                        rect: Rect {
                            x_min: c.x,
                            y_min: c.y,
                            x_max: c.x + c.width,
                            y_max: c.y + c.height,
                        },
                        rotation: c.rotation,
                        kind: RegionKind::NewPart,
                    });
                    debug_assert!(assertions::new_parts_clear_spacing(
                        &regions,
                        self.config.spacing
                    ));
                    let placement = Placement {
                        part: part.clone(),
                        x: c.x + margin,
                        y: c.y + margin,
                        width: c.width,
                        height: c.height,
                        rotation: c.rotation,
                        score: score.value(),
                    };
                    debug!(
                        "[NEST] placed part {}/{} (id {}) at ({:.2}, {:.2}) rot {}, score {:.2}",
                        i + 1,
                        parts.len(),
                        part.id,
                        placement.x,
                        placement.y,
                        c.rotation.degrees(),
                        score.value()
                    );
                    new_cut_areas.push(CutArea::from_placement(&placement));
                    placements.push(placement);
                }
                None => {
                    debug!(
                        "[NEST] part {}/{} (id {}, {:.2}x{:.2}) fits in no rotation or position",
                        i + 1,
                        parts.len(),
                        part.id,
                        part.width,
                        part.height
                    );
                    failed_parts.push(part.clone());
                }
            }
        }

        debug_assert!(assertions::placements_within_bounds(
            &placements,
            sheet,
            margin
        ));

        let total_area_used: f32 = placements.iter().map(Placement::area).sum();
        let sheet_area = sheet.area();
        let efficiency = match sheet_area > 0.0 {
            true => total_area_used / sheet_area,
            false => 0.0,
        };
        let existing_cut_area: f32 = regions
            .iter()
            .filter(|r| r.kind == RegionKind::ExistingCut)
            .map(|r| r.rect.area())
            .sum();

        info!(
            "[NEST] placed {}/{} parts, {:.1}% utilization, {} candidates evaluated",
            placements.len(),
            parts.len(),
            efficiency * 100.0,
            n_evaluated.separate_with_commas()
        );

        Layout {
            placements,
            failed_parts,
            total_area_used,
            efficiency,
            remaining_area: sheet_area - total_area_used - existing_cut_area,
            new_cut_areas,
        }
    }
}
