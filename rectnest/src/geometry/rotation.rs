use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Quarter-turn rotation of a part or cut region.
///
/// Serialized as the angle in degrees, so configuration and job files read
/// `90` instead of an enum tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub fn degrees(self) -> f32 {
        match self {
            Rotation::R0 => 0.0,
            Rotation::R90 => 90.0,
            Rotation::R180 => 180.0,
            Rotation::R270 => 270.0,
        }
    }

    /// True for rotations that swap a rectangle's axes.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }

    /// Dimensions of a `width` x `height` rectangle after rotating it by `self`.
    pub fn apply_to_dims(self, width: f32, height: f32) -> (f32, f32) {
        match self.swaps_axes() {
            true => (height, width),
            false => (width, height),
        }
    }

    /// Maps an exact quarter-turn angle in degrees to its [`Rotation`].
    /// Angles outside `[0, 360)` are normalized first.
    pub fn from_degrees(degrees: f32) -> Option<Self> {
        match degrees.rem_euclid(360.0) {
            0.0 => Some(Rotation::R0),
            90.0 => Some(Rotation::R90),
            180.0 => Some(Rotation::R180),
            270.0 => Some(Rotation::R270),
            _ => None,
        }
    }
}

impl Serialize for Rotation {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.degrees() as u16)
    }
}

impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let degrees = f32::deserialize(deserializer)?;
        Rotation::from_degrees(degrees)
            .ok_or_else(|| D::Error::custom(format!("rotation must be a quarter turn: {degrees}")))
    }
}
