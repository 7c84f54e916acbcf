//! Geometric primitives and rotation handling.

pub mod primitives;
mod rotation;

#[doc(inline)]
pub use rotation::Rotation;
