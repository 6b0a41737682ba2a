pub mod compositor;
mod frame;
mod layer_stack;
mod null_surface;
mod primitives;
mod recording_surface;
mod scope;

pub use compositor::{Compositor, LayerPainter};
pub use frame::FrameSnapshot;
pub use layer_stack::CompositeLayer;
pub use null_surface::NullSurface;
pub use primitives::{
    Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use recording_surface::{RecordedPrimitive, RecordingSurface, SurfaceOp, SurfaceState};
pub use scope::{SurfaceScope, with_clip_scope};

use crate::core::Rect;
use crate::error::ChartResult;

/// Immediate-mode drawing surface consumed by the compositor and by layers.
///
/// State changes (`clip_rect`, `translate`) accumulate until the matching
/// `restore_state`; implementations must support nesting at least four deep.
pub trait DrawingSurface {
    fn save_state(&mut self) -> ChartResult<()>;

    fn restore_state(&mut self) -> ChartResult<()>;

    /// Intersects the current clip with `rect` (in current local coordinates).
    fn clip_rect(&mut self, rect: Rect) -> ChartResult<()>;

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()>;

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()>;

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    /// Releases transient resources accumulated while composing one frame.
    fn release_frame_resources(&mut self) {}
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
