pub mod color;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod path;
pub mod slice;

pub use color::{
    ColorResolver, FALLBACK_LIGHTNESS, FALLBACK_SATURATION, fallback_color, label_hue,
};
pub use geometry::{
    ArcPoint, CENTER_X, CENTER_Y, OUTER_RADIUS, degrees_to_radians, ring_inner_radius,
};
pub use input::ChartInput;
pub use layout::{LegendEntry, SliceLayout, build_slices, format_quantity};
pub use path::{build_path, large_arc_flag};
pub use slice::Slice;
