/// Collision outline of a [`Part`].
///
/// Every part is approximated by its axis-aligned bounding rectangle.
/// A richer polygon variant can be added here without touching the
/// placement contract.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Bounding rectangle, dimensions in inches.
    BoundingRect { width: f32, height: f32 },
}

/// A unit to be placed on a sheet. Immutable during placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    /// Unique identifier within a single nesting run.
    pub id: u64,
    /// Display name, used for labels in the drawings.
    pub name: Option<String>,
    /// Footprint width in inches, prior to any rotation.
    pub width: f32,
    /// Footprint height in inches, prior to any rotation.
    pub height: f32,
    pub outline: Outline,
    /// Number of copies requested. Only consulted by sheet selection,
    /// the engine places each part once.
    pub quantity: u32,
}

impl Part {
    /// Footprint the placement search operates on, prior to rotation.
    pub fn footprint(&self) -> (f32, f32) {
        match self.outline {
            Outline::BoundingRect { width, height } => (width, height),
        }
    }

    pub fn area(&self) -> f32 {
        let (width, height) = self.footprint();
        width * height
    }
}
