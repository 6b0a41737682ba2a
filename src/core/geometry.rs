use serde::{Deserialize, Serialize};

use crate::core::primitives::safe_div;
use crate::error::{ChartError, ChartResult};

/// Axis-aligned rectangle in surface pixel space, stored as edges.
///
/// Edges are kept as given; an inverted rectangle (`left > right`) is valid
/// and its extents are reported as absolute values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        (self.right - self.left).abs()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.bottom - self.top).abs()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Returns the same rectangle with `left <= right` and `top <= bottom`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Overlap of two rectangles; empty overlaps collapse to a zero-size rect.
    #[must_use]
    pub fn intersection(self, other: Rect) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        let left = a.left.max(b.left);
        let top = a.top.max(b.top);
        let right = a.right.min(b.right).max(left);
        let bottom = a.bottom.min(b.bottom).max(top);
        Self::new(left, top, right, bottom)
    }

    #[must_use]
    pub fn contains_rect(self, other: Rect) -> bool {
        let outer = self.normalized();
        let inner = other.normalized();
        inner.left >= outer.left
            && inner.top >= outer.top
            && inner.right <= outer.right
            && inner.bottom <= outer.bottom
    }
}

/// Insets between the chart bounds and the inner plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotMargins {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self::new(60.0, 40.0, 20.0, 40.0)
    }
}

/// Outer chart rectangle plus the inner rectangle where series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    chart: Rect,
    plot: Rect,
}

impl PlotArea {
    /// Creates a plot area, rejecting an inner rectangle outside the outer one.
    pub fn new(chart: Rect, plot: Rect) -> ChartResult<Self> {
        if !chart.is_finite() || !plot.is_finite() || !chart.contains_rect(plot) {
            return Err(invalid_plot_area(chart, plot));
        }
        Ok(Self { chart, plot })
    }

    /// Derives the inner rectangle by insetting `chart` with `margins`.
    ///
    /// Margins that overlap (left + right wider than the chart) are rejected.
    pub fn from_margins(chart: Rect, margins: PlotMargins) -> ChartResult<Self> {
        let bounds = chart.normalized();
        let plot = Rect::new(
            bounds.left + margins.left,
            bounds.top + margins.top,
            bounds.right - margins.right,
            bounds.bottom - margins.bottom,
        );
        if plot.left > plot.right || plot.top > plot.bottom {
            return Err(invalid_plot_area(chart, plot));
        }
        Self::new(chart, plot)
    }

    #[must_use]
    pub fn chart(self) -> Rect {
        self.chart
    }

    #[must_use]
    pub fn plot(self) -> Rect {
        self.plot
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.chart.left
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.chart.top
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.chart.right
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.chart.bottom
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.plot.left
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.plot.top
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.plot.right
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.plot.bottom
    }
}

fn invalid_plot_area(chart: Rect, plot: Rect) -> ChartError {
    ChartError::InvalidPlotArea {
        left: chart.left,
        top: chart.top,
        right: chart.right,
        bottom: chart.bottom,
        plot_left: plot.left,
        plot_top: plot.top,
        plot_right: plot.right,
        plot_bottom: plot.bottom,
    }
}

/// Screen-extent queries over the current plot area.
///
/// Holds `None` until the first layout pass; every query then answers `0.0`
/// because layout may legitimately be inspected before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotGeometry {
    plot_area: Option<PlotArea>,
}

impl PlotGeometry {
    #[must_use]
    pub fn new(plot_area: Option<PlotArea>) -> Self {
        Self { plot_area }
    }

    #[must_use]
    pub fn plot_area(self) -> Option<PlotArea> {
        self.plot_area
    }

    pub fn set_plot_area(&mut self, plot_area: PlotArea) {
        self.plot_area = Some(plot_area);
    }

    pub fn clear(&mut self) {
        self.plot_area = None;
    }

    #[must_use]
    pub fn axis_screen_width(self) -> f64 {
        self.plot_area.map_or(0.0, |area| area.chart.width())
    }

    #[must_use]
    pub fn axis_screen_height(self) -> f64 {
        self.plot_area.map_or(0.0, |area| area.chart.height())
    }

    #[must_use]
    pub fn plot_screen_width(self) -> f64 {
        self.plot_area.map_or(0.0, |area| area.plot.width())
    }

    #[must_use]
    pub fn plot_screen_height(self) -> f64 {
        self.plot_area.map_or(0.0, |area| area.plot.height())
    }

    /// Axis width divided evenly across `tick_count` ticks; `0.0` for zero ticks.
    #[must_use]
    pub fn step_width(self, tick_count: usize) -> f64 {
        safe_div(self.axis_screen_width(), tick_count as f64)
    }
}
