//! Bottom-left-fill nesting of rectangular parts on stock sheets, with sheet
//! selection and cut-drawing generation for laser cutting.

/// Entities to model nesting runs and their results
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing part and sheet descriptors into and exporting layouts out of this library
pub mod io;

/// The bottom-left-fill placement engine
pub mod nesting;

/// Selection of the best stock sheet for a part list
pub mod selection;

/// Helper functions which do not belong to any specific module
pub mod util;
