pub mod geometry;
pub mod primitives;
pub mod tick_filter;
pub mod types;

pub use geometry::{PlotArea, PlotGeometry, PlotMargins, Rect};
pub use primitives::safe_div;
pub use tick_filter::TickVisibilityFilter;
pub use types::{AxisKind, AxisTick, ClipMargins, Orientation};
