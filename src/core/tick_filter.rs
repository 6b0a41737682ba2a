use crate::core::{AxisKind, Orientation, Rect};

/// Decides whether a tick lies outside the visible plot body after panning.
///
/// Bounds are the inner plot rectangle shifted by the negated effective pan
/// offset. Comparisons are strict: a tick exactly on a bound stays visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickVisibilityFilter {
    plot: Rect,
    orientation: Orientation,
    move_x: f64,
    move_y: f64,
    category_labels_visible: bool,
}

impl TickVisibilityFilter {
    #[must_use]
    pub fn new(plot: Rect, orientation: Orientation, move_x: f64, move_y: f64) -> Self {
        Self {
            plot,
            orientation,
            move_x,
            move_y,
            category_labels_visible: true,
        }
    }

    /// Hidden category labels cull every category tick.
    #[must_use]
    pub fn with_category_labels_visible(mut self, visible: bool) -> Self {
        self.category_labels_visible = visible;
        self
    }

    /// Returns `true` when the tick at `(x, y)` on `axis` must not be drawn.
    #[must_use]
    pub fn should_cull(self, axis: AxisKind, x: f64, y: f64) -> bool {
        let culled = match (self.orientation, axis) {
            (Orientation::Vertical, AxisKind::Data) => {
                is_outside_vertical_bounds(self.plot, y, self.move_y)
            }
            (Orientation::Vertical, AxisKind::Category) => {
                !self.category_labels_visible
                    || is_outside_horizontal_bounds(self.plot, x, self.move_x)
            }
            (Orientation::Horizontal, AxisKind::Data) => {
                is_outside_horizontal_bounds(self.plot, x, self.move_x)
            }
            (Orientation::Horizontal, AxisKind::Category) => {
                !self.category_labels_visible
                    || is_outside_vertical_bounds(self.plot, y, self.move_y)
            }
        };
        if culled {
            tracing::trace!(axis = axis.name(), x, y, "cull tick");
        }
        culled
    }
}

/// `current_y < top - move_y || current_y > bottom - move_y`.
#[must_use]
pub fn is_outside_vertical_bounds(plot: Rect, current_y: f64, move_y: f64) -> bool {
    current_y < plot.top - move_y || current_y > plot.bottom - move_y
}

/// `current_x < left - move_x || current_x > right - move_x`.
#[must_use]
pub fn is_outside_horizontal_bounds(plot: Rect, current_x: f64, move_x: f64) -> bool {
    current_x < plot.left - move_x || current_x > plot.right - move_x
}
