/// Placement surface. Read-only to the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub id: u64,
    /// Full width in inches, margins included.
    pub width: f32,
    /// Full height in inches, margins included.
    pub height: f32,
    /// Usable area tracked by the caller's inventory, defaults to the full
    /// sheet area. Only consulted during sheet selection.
    pub remaining_area: f32,
}

impl Sheet {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
