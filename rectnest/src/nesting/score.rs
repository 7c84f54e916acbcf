use crate::entities::OccupiedRegion;
use ordered_float::NotNan;

/// Bonus awarded for every occupied-region edge colinear with the candidate.
const ADJACENCY_BONUS: f32 = 10.0;
/// Tolerance for the edge colinearity checks.
const ADJACENCY_TOLERANCE: f32 = 0.01;
/// Vertical position weighs heavier than horizontal in the bottom-left preference.
const VERTICAL_WEIGHT: f32 = 2.0;

/// Desirability of a candidate position, higher is better.
///
/// Sum of a bottom-left position preference and adjacency bonuses for edges
/// shared with occupied regions, minus the clear strips a placement would
/// strand to its right and above.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct PlacementScore(NotNan<f32>);

impl PlacementScore {
    pub fn new(score: f32) -> Self {
        PlacementScore(NotNan::new(score).expect("score is NaN"))
    }

    pub fn value(self) -> f32 {
        self.0.into_inner()
    }
}

/// Scores a candidate position in margin-adjusted coordinates.
pub fn evaluate(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    regions: &[OccupiedRegion],
) -> PlacementScore {
    let position = -(x + VERTICAL_WEIGHT * y);
    let adjacency = adjacency_bonus(x, y, width, height, regions);
    let waste = -(clear_gap_right(x, y, width, height, regions)
        + clear_gap_above(x, y, width, height, regions));
    PlacementScore::new(position + adjacency + waste)
}

/// Four independent edge comparisons per region, each worth [`ADJACENCY_BONUS`].
fn adjacency_bonus(x: f32, y: f32, width: f32, height: f32, regions: &[OccupiedRegion]) -> f32 {
    let mut bonus = 0.0;
    for region in regions {
        let r = &region.rect;
        if (r.x_max - x).abs() < ADJACENCY_TOLERANCE {
            bonus += ADJACENCY_BONUS;
        }
        if (x + width - r.x_min).abs() < ADJACENCY_TOLERANCE {
            bonus += ADJACENCY_BONUS;
        }
        if (r.y_max - y).abs() < ADJACENCY_TOLERANCE {
            bonus += ADJACENCY_BONUS;
        }
        if (y + height - r.y_min).abs() < ADJACENCY_TOLERANCE {
            bonus += ADJACENCY_BONUS;
        }
    }
    bonus
}

/// Clear distance to the nearest region strictly right of the candidate,
/// considering only regions overlapping its vertical extent. 0 when the way
/// to the right is unobstructed.
fn clear_gap_right(x: f32, y: f32, width: f32, height: f32, regions: &[OccupiedRegion]) -> f32 {
    regions
        .iter()
        .map(|region| &region.rect)
        .filter(|r| r.x_min > x + width && r.y_min < y + height && r.y_max > y)
        .map(|r| r.x_min - (x + width))
        .reduce(f32::min)
        .unwrap_or(0.0)
}

/// Clear distance to the nearest region strictly above the candidate,
/// considering only regions overlapping its horizontal extent.
fn clear_gap_above(x: f32, y: f32, width: f32, height: f32, regions: &[OccupiedRegion]) -> f32 {
    regions
        .iter()
        .map(|region| &region.rect)
        .filter(|r| r.y_min > y + height && r.x_min < x + width && r.x_max > x)
        .map(|r| r.y_min - (y + height))
        .reduce(f32::min)
        .unwrap_or(0.0)
}
