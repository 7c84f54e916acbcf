use crate::entities::{CutArea, Layout, Part, Placement, Sheet};
use crate::io::ext_repr::{
    ExtLayout, ExtPlacement, ExtPoint, ExtRankedSheet, ExtSelection, PartDescriptor,
    RegionDescriptor, SheetDescriptor, Unit,
};
use crate::selection::{RankedSheet, SelectionOutcome};

/// Exports a [`Layout`] by composing an [`ExtLayout`] from it.
pub fn export_layout(layout: &Layout) -> ExtLayout {
    ExtLayout {
        placements: layout.placements.iter().map(export_placement).collect(),
        failed_parts: layout.failed_parts.iter().map(export_part).collect(),
        total_area_used: layout.total_area_used,
        efficiency: layout.efficiency,
        utilization_percent: layout.utilization_percent(),
        remaining_area: layout.remaining_area,
        new_cut_areas: layout.new_cut_areas.iter().map(export_cut_area).collect(),
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        part_id: placement.part.id,
        part_name: placement.part.name.clone(),
        x: placement.x,
        y: placement.y,
        width: placement.width,
        height: placement.height,
        rotation: placement.rotation.degrees(),
        score: placement.score,
    }
}

/// Exports a normalized [`Part`] back to descriptor form.
///
/// The descriptor is tagged with inches so re-imported parts never take a
/// second trip through the unit heuristic.
pub fn export_part(part: &Part) -> PartDescriptor {
    PartDescriptor {
        id: Some(part.id),
        name: part.name.clone(),
        width: Some(part.width),
        height: Some(part.height),
        unit: Some(Unit::Inches),
        quantity: Some(part.quantity),
        ..PartDescriptor::default()
    }
}

pub fn export_cut_area(area: &CutArea) -> RegionDescriptor {
    RegionDescriptor {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height,
        rotation: Some(area.rotation.degrees()),
        part_id: Some(area.part_id),
        part_name: area.part_name.clone(),
        polygon: Some(
            area.polygon
                .iter()
                .map(|p| ExtPoint { x: p.x(), y: p.y() })
                .collect(),
        ),
    }
}

pub fn export_sheet(sheet: &Sheet) -> SheetDescriptor {
    SheetDescriptor {
        id: Some(sheet.id),
        width: sheet.width,
        height: sheet.height,
        remaining_area: Some(sheet.remaining_area),
    }
}

pub fn export_ranked_sheet(ranked: &RankedSheet) -> ExtRankedSheet {
    ExtRankedSheet {
        sheet: export_sheet(&ranked.sheet),
        layout: export_layout(&ranked.layout),
        efficiency: ranked.efficiency,
        wasted_area: ranked.wasted_area,
    }
}

/// Exports a [`SelectionOutcome`] by composing an [`ExtSelection`] from it.
/// The failure variants map to `success: false` with a stable error message.
pub fn export_selection(outcome: &SelectionOutcome) -> ExtSelection {
    match outcome {
        SelectionOutcome::Selected { best, alternatives } => ExtSelection {
            success: true,
            error: None,
            required_area: None,
            n_candidate_sheets: None,
            n_viable_sheets: None,
            optimal_sheet: Some(export_sheet(&best.sheet)),
            layout: Some(export_layout(&best.layout)),
            alternatives: Some(alternatives.iter().map(export_ranked_sheet).collect()),
        },
        SelectionOutcome::InsufficientArea {
            required_area,
            n_candidates,
        } => ExtSelection {
            success: false,
            error: Some("No sheets with sufficient area found".into()),
            required_area: Some(*required_area),
            n_candidate_sheets: Some(*n_candidates),
            n_viable_sheets: None,
            optimal_sheet: None,
            layout: None,
            alternatives: None,
        },
        SelectionOutcome::NoFit { n_viable } => ExtSelection {
            success: false,
            error: Some("Parts do not fit on any available sheet".into()),
            required_area: None,
            n_candidate_sheets: None,
            n_viable_sheets: Some(*n_viable),
            optimal_sheet: None,
            layout: None,
            alternatives: None,
        },
    }
}
