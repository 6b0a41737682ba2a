use crate::core::{ClipMargins, Orientation, PlotArea, TickVisibilityFilter};
use crate::interaction::{PanMode, PanState, Translation};

/// Immutable layout and pan snapshot for one composited frame.
///
/// Captured once at the start of `render_frame` and shared by reference with
/// every pipeline step, so no step can observe a half-updated plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub plot_area: PlotArea,
    pub margins: ClipMargins,
    pub orientation: Orientation,
    /// Mode after applying the enabled flag (`None` while pan is disabled).
    pub pan_mode: PanMode,
    /// Effective offset: the raw translation with excluded components zeroed.
    pub offset: Translation,
    pub show_right_axis: bool,
}

impl FrameSnapshot {
    #[must_use]
    pub fn new(
        plot_area: PlotArea,
        margins: ClipMargins,
        orientation: Orientation,
        pan: PanState,
        show_right_axis: bool,
    ) -> Self {
        Self {
            plot_area,
            margins,
            orientation,
            pan_mode: pan.effective_mode(),
            offset: pan.effective_offset(),
            show_right_axis,
        }
    }

    #[must_use]
    pub fn move_x(&self) -> f64 {
        self.offset.x
    }

    #[must_use]
    pub fn move_y(&self) -> f64 {
        self.offset.y
    }

    #[must_use]
    pub fn tick_filter(&self, category_labels_visible: bool) -> TickVisibilityFilter {
        TickVisibilityFilter::new(
            self.plot_area.plot(),
            self.orientation,
            self.offset.x,
            self.offset.y,
        )
        .with_category_labels_visible(category_labels_visible)
    }
}
