use serde::{Deserialize, Serialize};

/// Linear unit of a part descriptor's dimensions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Inches,
    Meters,
}

/// Raw part geometry as supplied by the caller.
/// Dimensions are resolved per axis: explicit `width`/`height` first, then
/// the layout dimensions, then the raw bounding box, then a 2" placeholder.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PartDescriptor {
    /// Stable identifier, the part index is used if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name, used for labels in the drawings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Width in `unit`, takes precedence over every other width source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Height in `unit`, takes precedence over every other height source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Width reported by the upstream document layout step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_x: Option<f32>,
    /// Height reported by the upstream document layout step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_y: Option<f32>,
    /// Raw bounding-box width of the part's true geometry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box_x: Option<f32>,
    /// Raw bounding-box height of the part's true geometry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box_y: Option<f32>,
    /// Unit the dimensions are expressed in.
    /// If not specified, dimensions are taken as inches, unless both resolve
    /// below 1.0, which is taken to mean meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    /// Path data of the part's true outline, in points (1/72").
    /// Used to derive dimensions when no explicit width is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<String>,
    /// Number of copies requested, 1 if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SheetDescriptor {
    /// Stable identifier, the sheet index is used if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Full width in inches, margins included
    pub width: f32,
    /// Full height in inches, margins included
    pub height: f32,
    /// Usable area tracked by the caller's inventory.
    /// The full sheet area is assumed if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_area: Option<f32>,
}

/// An already-consumed rectangle on a sheet, as exchanged with callers.
/// Doubles as the record for newly cut areas in a layout result, which is
/// the shape callers persist and later feed back as existing cuts.
/// Existing cuts are read in margin-adjusted sheet coordinates, newly cut
/// areas are written in absolute coordinates with the margin included.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RegionDescriptor {
    /// Lower-left corner x
    #[serde(default)]
    pub x: f32,
    /// Lower-left corner y
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    /// Rotation in degrees, a quarter turn. 0 if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    /// Identifier of the part that was cut from this region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_id: Option<u64>,
    /// Name of the part that was cut from this region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    /// Corner points of the cut outline, drawn in the master drawing when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<ExtPoint>>,
}

/// A 2D point as exchanged with callers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtPoint {
    pub x: f32,
    pub y: f32,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Identifier of the placed part
    pub part_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    /// Lower-left corner x in absolute sheet coordinates, margin included
    pub x: f32,
    /// Lower-left corner y in absolute sheet coordinates, margin included
    pub y: f32,
    /// Footprint width after rotation
    pub width: f32,
    /// Footprint height after rotation
    pub height: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Score of the winning candidate position, higher is better
    pub score: f32,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    pub placements: Vec<ExtPlacement>,
    /// Parts that could not be placed in any rotation or position
    pub failed_parts: Vec<PartDescriptor>,
    /// Sum of the post-rotation footprints of all placements
    pub total_area_used: f32,
    /// `total_area_used` divided by the full sheet area
    pub efficiency: f32,
    /// `efficiency` expressed as a percentage
    pub utilization_percent: f32,
    /// Sheet area net of placements and caller-supplied cut regions
    pub remaining_area: f32,
    /// Rectangle-as-polygon records of the areas cut by this run
    pub new_cut_areas: Vec<RegionDescriptor>,
}

/// Discriminated result of a sheet selection, never an error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSelection {
    pub success: bool,
    /// Reason for failure, present iff `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Required area including the buffer, reported when no sheet offers it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_area: Option<f32>,
    /// Number of candidate sheets considered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_candidate_sheets: Option<usize>,
    /// Number of sheets that passed the area filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_viable_sheets: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_sheet: Option<SheetDescriptor>,
    /// Layout of the parts on the optimal sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<ExtLayout>,
    /// Remaining viable sheets, best first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<ExtRankedSheet>>,
}

/// A viable but not selected sheet, with the metrics it was ranked by.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRankedSheet {
    pub sheet: SheetDescriptor,
    /// Layout the parts would take on this sheet
    pub layout: ExtLayout,
    pub efficiency: f32,
    pub wasted_area: f32,
}
