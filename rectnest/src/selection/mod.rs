//! Selection of the best sheet from a catalog of candidate stocks.

use crate::entities::{Layout, Sheet};
use crate::io::ext_repr::{PartDescriptor, SheetDescriptor};
use crate::io::import;
use crate::nesting::{NestConfig, NestingEngine};
use anyhow::{Result, ensure};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Two efficiencies closer than this are treated as a practical tie and
/// ranked by wasted area instead.
const EFFICIENCY_TIE_WINDOW: f32 = 0.05;

/// Configuration of a [`SheetSelector`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fractional slack on top of the summed part areas when filtering sheets
    /// by raw area. Bounding-rectangle packing never reaches the parts' raw
    /// area, without the buffer nominally large enough sheets would pass the
    /// filter and fail the actual nesting.
    pub area_buffer: f32,
    pub nest: NestConfig,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            area_buffer: 0.5,
            nest: NestConfig::default(),
        }
    }
}

/// A sheet that fits all parts, with the metrics it is ranked by.
#[derive(Clone, Debug)]
pub struct RankedSheet {
    pub sheet: Sheet,
    pub layout: Layout,
    pub efficiency: f32,
    /// Tracked remaining area of the sheet minus the area this layout uses.
    pub wasted_area: f32,
}

/// Outcome of a sheet selection. The failure variants are results, not errors.
#[derive(Clone, Debug)]
pub enum SelectionOutcome {
    /// The best sheet with its layout, plus the remaining viable sheets.
    Selected {
        best: RankedSheet,
        alternatives: Vec<RankedSheet>,
    },
    /// No sheet offers the required area, nesting was never attempted.
    InsufficientArea {
        required_area: f32,
        n_candidates: usize,
    },
    /// Sheets passed the area filter but none fit every part.
    NoFit { n_viable: usize },
}

/// Picks the best sheet from a catalog by nesting the parts on every sheet
/// that passes a raw area filter and ranking the complete layouts.
pub struct SheetSelector {
    pub config: SelectionConfig,
    engine: NestingEngine,
}

impl SheetSelector {
    pub fn new(config: SelectionConfig) -> Result<Self> {
        ensure!(
            config.area_buffer.is_finite() && config.area_buffer >= 0.0,
            "area buffer must be finite and non-negative: {}",
            config.area_buffer
        );
        let engine = NestingEngine::new(config.nest.clone())?;
        Ok(SheetSelector { config, engine })
    }

    /// Finds the sheet that fits all `parts` best.
    ///
    /// Sheets are ranked by efficiency descending. Within
    /// [`EFFICIENCY_TIE_WINDOW`] of the leader the sheet wasting the least of
    /// its tracked remaining area wins. A sheet on which nesting fails is
    /// skipped, it never aborts the search over the remaining candidates.
    pub fn find_optimal_sheet(
        &self,
        parts: &[PartDescriptor],
        sheets: &[SheetDescriptor],
    ) -> SelectionOutcome {
        let total_parts_area: f32 = parts
            .iter()
            .enumerate()
            .map(|(idx, ext)| {
                let part = import::part_from_descriptor(ext, idx);
                part.area() * part.quantity as f32
            })
            .sum();
        let required_area = total_parts_area * (1.0 + self.config.area_buffer);

        info!(
            "[SELECT] {} parts need {:.1} sq in (buffer {:.0}%), {} candidate sheets",
            parts.len(),
            required_area,
            self.config.area_buffer * 100.0,
            sheets.len()
        );

        let viable: Vec<Sheet> = sheets
            .iter()
            .enumerate()
            .map(|(idx, ext)| import::sheet_from_descriptor(ext, idx))
            .filter(|sheet| sheet.remaining_area >= required_area)
            .collect();

        if viable.is_empty() {
            warn!(
                "[SELECT] no sheet offers {required_area:.1} sq in, {} candidates rejected",
                sheets.len()
            );
            return SelectionOutcome::InsufficientArea {
                required_area,
                n_candidates: sheets.len(),
            };
        }

        let n_viable = viable.len();
        let mut ranked: Vec<RankedSheet> = vec![];
        for sheet in viable {
            let layout = self.engine.place_on_sheet(parts, &sheet, &[]);
            if layout.is_complete() {
                debug!(
                    "[SELECT] sheet {} fits all parts at {:.1}% utilization",
                    sheet.id,
                    layout.utilization_percent()
                );
                ranked.push(RankedSheet {
                    efficiency: layout.efficiency,
                    wasted_area: sheet.remaining_area - layout.total_area_used,
                    sheet,
                    layout,
                });
            } else {
                debug!(
                    "[SELECT] sheet {} rejected, {} of {} parts failed to place",
                    sheet.id,
                    layout.failed_parts.len(),
                    parts.len()
                );
            }
        }

        if ranked.is_empty() {
            warn!("[SELECT] none of the {n_viable} viable sheets fits every part");
            return SelectionOutcome::NoFit { n_viable };
        }

        ranked.sort_by(|a, b| {
            b.efficiency
                .total_cmp(&a.efficiency)
                .then(a.wasted_area.total_cmp(&b.wasted_area))
        });

        // The leader among the near-tied heads is the one wasting the least.
        let top_efficiency = ranked[0].efficiency;
        let mut best_idx = 0;
        for (idx, r) in ranked.iter().enumerate().skip(1) {
            if (top_efficiency - r.efficiency).abs() > EFFICIENCY_TIE_WINDOW {
                break;
            }
            if r.wasted_area < ranked[best_idx].wasted_area {
                best_idx = idx;
            }
        }
        let best = ranked.remove(best_idx);

        info!(
            "[SELECT] sheet {} selected at {:.1}% utilization, {} alternatives",
            best.sheet.id,
            best.layout.utilization_percent(),
            ranked.len()
        );

        SelectionOutcome::Selected {
            best,
            alternatives: ranked,
        }
    }
}
