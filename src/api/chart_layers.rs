use crate::core::{AxisKind, AxisTick, ClipMargins, Orientation, PlotArea, PlotGeometry};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, FrameSnapshot};

use super::{
    AxisRenderer, CategoryAxis, DataAxis, ItemLabelFormatterFn, Legend, format_item_label,
    measure_clip_margins, render_axis_labels,
};

/// Drawing hooks a concrete chart type supplies to `AxisChart`.
///
/// Every hook defaults to drawing nothing. Hooks receive a surface whose clip
/// and origin are already set for the layer, so they draw in unpanned plot
/// coordinates.
pub trait ChartLayers {
    fn orientation(&self) -> Orientation;

    /// Widens the plot clip to the chart edge unless a right-hand axis is
    /// drawn there.
    fn is_showing_right_axis(&self) -> bool {
        false
    }

    /// Label overhang used to widen the pan clips of both axis runs.
    fn clip_margins(&self, data_axis: &DataAxis, category_axis: &CategoryAxis) -> ClipMargins {
        measure_clip_margins(self.orientation(), data_axis, category_axis)
    }

    fn draw_axis_body(
        &mut self,
        _axis: AxisKind,
        _ctx: &mut LayerContext<'_>,
        _surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        Ok(())
    }

    fn draw_plot_body(
        &mut self,
        _ctx: &mut LayerContext<'_>,
        _surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        Ok(())
    }

    fn draw_axis_lines(
        &mut self,
        _ctx: &mut LayerContext<'_>,
        _surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        Ok(())
    }

    fn draw_axis_ticks(
        &mut self,
        _axis: AxisKind,
        _ctx: &mut LayerContext<'_>,
        _surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        Ok(())
    }

    /// Defaults to the chart's own legend.
    fn draw_legend(
        &mut self,
        ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        let area = ctx.plot_area();
        ctx.legend().render(surface, &area)
    }
}

/// Per-frame state handed to every layer hook.
pub struct LayerContext<'a> {
    frame: &'a FrameSnapshot,
    data_axis: &'a mut DataAxis,
    category_axis: &'a mut CategoryAxis,
    legend: &'a Legend,
    item_label_formatter: Option<&'a ItemLabelFormatterFn>,
}

impl<'a> LayerContext<'a> {
    #[must_use]
    pub fn new(
        frame: &'a FrameSnapshot,
        data_axis: &'a mut DataAxis,
        category_axis: &'a mut CategoryAxis,
        legend: &'a Legend,
        item_label_formatter: Option<&'a ItemLabelFormatterFn>,
    ) -> Self {
        Self {
            frame,
            data_axis,
            category_axis,
            legend,
            item_label_formatter,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &FrameSnapshot {
        self.frame
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.frame.plot_area
    }

    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        PlotGeometry::new(Some(self.frame.plot_area))
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.frame.orientation
    }

    #[must_use]
    pub fn move_x(&self) -> f64 {
        self.frame.move_x()
    }

    #[must_use]
    pub fn move_y(&self) -> f64 {
        self.frame.move_y()
    }

    #[must_use]
    pub fn data_axis(&self) -> &DataAxis {
        self.data_axis
    }

    pub fn data_axis_mut(&mut self) -> &mut DataAxis {
        self.data_axis
    }

    #[must_use]
    pub fn category_axis(&self) -> &CategoryAxis {
        self.category_axis
    }

    pub fn category_axis_mut(&mut self) -> &mut CategoryAxis {
        self.category_axis
    }

    #[must_use]
    pub fn legend(&self) -> &Legend {
        self.legend
    }

    /// Whether a tick at `(x, y)` has been panned out of the plot area.
    #[must_use]
    pub fn should_cull_tick(&self, axis: AxisKind, x: f64, y: f64) -> bool {
        self.frame
            .tick_filter(self.category_axis.is_showing_labels())
            .should_cull(axis, x, y)
    }

    /// Draws `ticks` through the matching axis without culling.
    pub fn render_axis_labels(
        &mut self,
        axis: AxisKind,
        ticks: &[AxisTick],
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        let orientation = self.frame.orientation;
        let renderer: &mut dyn AxisRenderer = match axis {
            AxisKind::Data => &mut *self.data_axis,
            AxisKind::Category => &mut *self.category_axis,
        };
        render_axis_labels(renderer, axis, orientation, ticks, surface)
    }

    /// Drops ticks panned out of view, then draws the rest.
    pub fn render_visible_axis_labels(
        &mut self,
        axis: AxisKind,
        ticks: &[AxisTick],
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        let filter = self
            .frame
            .tick_filter(self.category_axis.is_showing_labels());
        let orientation = self.frame.orientation;
        let renderer: &mut dyn AxisRenderer = match axis {
            AxisKind::Data => &mut *self.data_axis,
            AxisKind::Category => &mut *self.category_axis,
        };
        let visible = ticks
            .iter()
            .filter(|tick| !filter.should_cull(axis, tick.x, tick.y));
        render_axis_labels(renderer, axis, orientation, visible, surface)
    }

    /// Draws both axis lines pinned to the plot edges: the vertically running
    /// axis along the left edge, the horizontally running one along the bottom.
    pub fn render_axis_lines(&self, surface: &mut dyn DrawingSurface) -> ChartResult<()> {
        let plot = self.frame.plot_area.plot();
        let left_edge = ((plot.left, plot.top), (plot.left, plot.bottom));
        let bottom_edge = ((plot.left, plot.bottom), (plot.right, plot.bottom));
        let (data_edge, category_edge) = match self.frame.orientation {
            Orientation::Vertical => (left_edge, bottom_edge),
            Orientation::Horizontal => (bottom_edge, left_edge),
        };
        self.data_axis
            .render_axis_line(surface, data_edge.0, data_edge.1)?;
        self.category_axis
            .render_axis_line(surface, category_edge.0, category_edge.1)
    }

    #[must_use]
    pub fn format_item_label(&self, value: f64) -> String {
        format_item_label(self.item_label_formatter, value)
    }
}

#[cfg(test)]
mod tests {
    use super::LayerContext;
    use crate::api::{CategoryAxis, DataAxis, Legend};
    use crate::core::{AxisKind, AxisTick, ClipMargins, Orientation, PlotArea, Rect};
    use crate::interaction::{PanMode, PanState, Translation};
    use crate::render::{FrameSnapshot, RecordedPrimitive, RecordingSurface};

    fn frame_with(orientation: Orientation, offset: Translation) -> FrameSnapshot {
        let mut pan = PanState::new(PanMode::Free, true);
        pan.set_translation(offset);
        FrameSnapshot::new(
            PlotArea::new(
                Rect::new(0.0, 0.0, 300.0, 200.0),
                Rect::new(40.0, 20.0, 280.0, 170.0),
            )
            .expect("valid area"),
            ClipMargins::default(),
            orientation,
            pan,
            false,
        )
    }

    fn frame() -> FrameSnapshot {
        frame_with(Orientation::Vertical, Translation::new(0.0, 20.0))
    }

    #[test]
    fn visible_labels_skip_ticks_panned_out_of_view() {
        let frame = frame();
        let mut data_axis = DataAxis::default();
        let mut category_axis = CategoryAxis::default();
        let legend = Legend::default();
        let mut ctx =
            LayerContext::new(&frame, &mut data_axis, &mut category_axis, &legend, None);

        // Visible y range is [0, 150] once shifted down by 20.
        let ticks = vec![
            AxisTick::new(0, 40.0, 160.0, "0"),
            AxisTick::new(1, 40.0, 100.0, "50"),
            AxisTick::new(2, 40.0, 0.0, "100"),
        ];
        let mut surface = RecordingSurface::new();
        ctx.render_visible_axis_labels(AxisKind::Data, &ticks, &mut surface)
            .expect("labels");

        let labels: Vec<_> = surface.texts().map(|text| text.text.clone()).collect();
        assert_eq!(labels, vec!["50", "100"]);
        assert_eq!(data_axis.current_tick_id(), Some(2));
    }

    #[test]
    fn item_labels_default_to_plain_text() {
        let frame = frame();
        let mut data_axis = DataAxis::default();
        let mut category_axis = CategoryAxis::default();
        let legend = Legend::default();
        let ctx = LayerContext::new(&frame, &mut data_axis, &mut category_axis, &legend, None);
        assert_eq!(ctx.format_item_label(4.5), "4.5");
    }

    #[test]
    fn tick_culling_query_tracks_pan_offset_in_vertical_charts() {
        // Visible x range is [30, 270], visible y range is [0, 150].
        let frame = frame_with(Orientation::Vertical, Translation::new(10.0, 20.0));
        let mut data_axis = DataAxis::default();
        let mut category_axis = CategoryAxis::default();
        let legend = Legend::default();
        let ctx = LayerContext::new(&frame, &mut data_axis, &mut category_axis, &legend, None);

        assert!(ctx.should_cull_tick(AxisKind::Data, 40.0, -1.0));
        assert!(!ctx.should_cull_tick(AxisKind::Data, 40.0, 0.0));
        assert!(!ctx.should_cull_tick(AxisKind::Data, 40.0, 150.0));
        assert!(ctx.should_cull_tick(AxisKind::Data, 40.0, 151.0));

        assert!(ctx.should_cull_tick(AxisKind::Category, 29.0, 170.0));
        assert!(!ctx.should_cull_tick(AxisKind::Category, 30.0, 170.0));
        assert!(!ctx.should_cull_tick(AxisKind::Category, 270.0, 170.0));
        assert!(ctx.should_cull_tick(AxisKind::Category, 271.0, 170.0));
    }

    #[test]
    fn tick_culling_query_swaps_axis_roles_in_horizontal_charts() {
        let frame = frame_with(Orientation::Horizontal, Translation::new(10.0, 20.0));
        let mut data_axis = DataAxis::default();
        let mut category_axis = CategoryAxis::default();
        let legend = Legend::default();
        let ctx = LayerContext::new(&frame, &mut data_axis, &mut category_axis, &legend, None);

        // Data ticks run along x, so y is ignored.
        assert!(ctx.should_cull_tick(AxisKind::Data, 29.0, 100.0));
        assert!(!ctx.should_cull_tick(AxisKind::Data, 270.0, -500.0));
        assert!(ctx.should_cull_tick(AxisKind::Data, 271.0, 100.0));

        // Category ticks run along y, so x is ignored.
        assert!(ctx.should_cull_tick(AxisKind::Category, 100.0, -1.0));
        assert!(!ctx.should_cull_tick(AxisKind::Category, 999.0, 150.0));
        assert!(ctx.should_cull_tick(AxisKind::Category, 100.0, 151.0));
    }

    #[test]
    fn hidden_category_labels_cull_category_ticks_in_both_orientations() {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let frame = frame_with(orientation, Translation::new(10.0, 20.0));
            let mut data_axis = DataAxis::default();
            let mut category_axis = CategoryAxis::default();
            category_axis.hide_labels();
            let legend = Legend::default();
            let ctx =
                LayerContext::new(&frame, &mut data_axis, &mut category_axis, &legend, None);

            assert!(ctx.should_cull_tick(AxisKind::Category, 100.0, 100.0));
            assert!(!ctx.should_cull_tick(AxisKind::Data, 100.0, 100.0));
        }
    }

    #[test]
    fn axis_lines_pin_to_plot_edges_per_orientation() {
        let lines_for = |orientation| {
            let frame = frame_with(orientation, Translation::new(10.0, 20.0));
            let mut data_axis = DataAxis::default();
            let mut category_axis = CategoryAxis::default();
            category_axis.style_mut().line_width = 2.0;
            let legend = Legend::default();
            let ctx =
                LayerContext::new(&frame, &mut data_axis, &mut category_axis, &legend, None);
            let mut surface = RecordingSurface::new();
            ctx.render_axis_lines(&mut surface).expect("axis lines");
            surface
                .primitives()
                .filter_map(|(primitive, _)| match primitive {
                    RecordedPrimitive::Line(line) => {
                        Some((line.x1, line.y1, line.x2, line.y2, line.stroke_width))
                    }
                    _ => None,
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(
            lines_for(Orientation::Vertical),
            vec![
                (40.0, 20.0, 40.0, 170.0, 1.0),
                (40.0, 170.0, 280.0, 170.0, 2.0),
            ]
        );
        assert_eq!(
            lines_for(Orientation::Horizontal),
            vec![
                (40.0, 170.0, 280.0, 170.0, 1.0),
                (40.0, 20.0, 40.0, 170.0, 2.0),
            ]
        );
    }
}
