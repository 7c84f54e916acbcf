//! Entities that compose a nesting run: parts, sheets, occupied regions and
//! the resulting layout.

mod layout;
mod part;
mod placement;
mod region;
mod sheet;

#[doc(inline)]
pub use layout::CutArea;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use part::Outline;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use region::OccupiedRegion;
#[doc(inline)]
pub use region::RegionKind;
#[doc(inline)]
pub use sheet::Sheet;
