mod cut_drawing;
mod master_drawing;
mod path_data;
mod svg_util;

#[doc(inline)]
pub use cut_drawing::cut_drawing;
#[doc(inline)]
pub use master_drawing::master_drawing;

#[doc(inline)]
pub use path_data::DEFAULT_CLEARANCE_RADIUS;
#[doc(inline)]
pub use path_data::dilated_bounds;
#[doc(inline)]
pub use path_data::extract_bounds;
#[doc(inline)]
pub use path_data::extract_points;

#[doc(inline)]
pub use svg_util::Color;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgLayoutTheme;
