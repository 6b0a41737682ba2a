use tracing::{debug, trace};

use crate::core::{AxisKind, ClipMargins, PlotArea, PlotGeometry, PlotMargins, Rect};
use crate::error::ChartResult;
use crate::interaction::{InteractionMode, PanMode, PanState, Translation};
use crate::render::{
    CompositeLayer, Compositor, DrawingSurface, FrameSnapshot, LayerPainter, RectPrimitive,
};

use super::validation::{validate_bounds, validate_chart_config, validate_plot_margins};
use super::{
    AxisChartConfig, AxisTitle, CategoryAxis, ChartLayers, ChartTitle, DataAxis,
    ItemLabelFormatterFn, LayerContext, Legend, RenderStyle, format_item_label,
};

/// Frame controller for charts drawn against a data axis and a category axis.
///
/// Owns layout, pan state and the shared chart components; the concrete chart
/// type supplies the layer hooks through `L`.
pub struct AxisChart<L: ChartLayers> {
    layers: L,
    bounds: Rect,
    plot_margins: PlotMargins,
    render_style: RenderStyle,
    geometry: PlotGeometry,
    pan: PanState,
    data_axis: DataAxis,
    category_axis: CategoryAxis,
    title: ChartTitle,
    axis_title: Option<AxisTitle>,
    legend: Legend,
    item_label_formatter: Option<ItemLabelFormatterFn>,
}

impl<L: ChartLayers> AxisChart<L> {
    pub fn new(layers: L, config: AxisChartConfig) -> ChartResult<Self> {
        validate_chart_config(&config)?;
        let style = config.render_style;
        Ok(Self {
            layers,
            bounds: config.bounds,
            plot_margins: config.plot_margins,
            render_style: style,
            geometry: PlotGeometry::default(),
            pan: PanState::new(config.pan_mode, config.pan_enabled),
            data_axis: DataAxis::new(config.data_axis_style),
            category_axis: CategoryAxis::new(config.category_axis_style),
            title: ChartTitle::new(style.title_font_size_px, style.title_color),
            axis_title: None,
            legend: Legend::new(config.legend),
            item_label_formatter: None,
        })
    }

    #[must_use]
    pub fn layers(&self) -> &L {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut L {
        &mut self.layers
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Applies to the next frame; the current geometry keeps the last layout.
    pub fn set_bounds(&mut self, bounds: Rect) -> ChartResult<()> {
        validate_bounds(bounds)?;
        PlotArea::from_margins(bounds, self.plot_margins)?;
        self.bounds = bounds;
        Ok(())
    }

    #[must_use]
    pub fn plot_margins(&self) -> PlotMargins {
        self.plot_margins
    }

    pub fn set_plot_margins(&mut self, margins: PlotMargins) -> ChartResult<()> {
        validate_plot_margins(margins)?;
        PlotArea::from_margins(self.bounds, margins)?;
        self.plot_margins = margins;
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_pan_mode(&mut self, mode: PanMode) {
        self.pan.set_pan_mode(mode);
    }

    #[must_use]
    pub fn pan_mode(&self) -> PanMode {
        self.pan.pan_mode()
    }

    pub fn enable_pan(&mut self) {
        self.pan.enable_pan();
    }

    pub fn disable_pan(&mut self) {
        self.pan.disable_pan();
    }

    #[must_use]
    pub fn is_pan_enabled(&self) -> bool {
        self.pan.is_pan_enabled()
    }

    #[must_use]
    pub fn translation(&self) -> Translation {
        self.pan.translation()
    }

    /// Sets the raw pan offset; axes excluded by the pan mode ignore their
    /// component at draw time.
    pub fn set_translation(&mut self, translation: Translation) {
        self.pan.set_translation(translation);
    }

    pub fn reset_translation(&mut self) {
        self.pan.reset_translation();
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.pan.interaction_mode()
    }

    pub fn pan_start(&mut self) {
        self.pan.on_pan_start();
    }

    pub fn pan_move(&mut self, delta_x: f64, delta_y: f64) {
        self.pan.on_pan_move(delta_x, delta_y);
    }

    pub fn pan_end(&mut self) {
        self.pan.on_pan_end();
    }

    #[must_use]
    pub fn data_axis(&self) -> &DataAxis {
        &self.data_axis
    }

    pub fn data_axis_mut(&mut self) -> &mut DataAxis {
        &mut self.data_axis
    }

    #[must_use]
    pub fn category_axis(&self) -> &CategoryAxis {
        &self.category_axis
    }

    pub fn category_axis_mut(&mut self) -> &mut CategoryAxis {
        &mut self.category_axis
    }

    #[must_use]
    pub fn title(&self) -> &ChartTitle {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut ChartTitle {
        &mut self.title
    }

    /// Axis captions, created on first access.
    pub fn axis_title(&mut self) -> &mut AxisTitle {
        let style = self.render_style;
        self.axis_title.get_or_insert_with(|| {
            AxisTitle::new(style.axis_title_font_size_px, style.axis_title_color)
        })
    }

    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn legend_mut(&mut self) -> &mut Legend {
        &mut self.legend
    }

    pub fn set_item_label_formatter(&mut self, formatter: ItemLabelFormatterFn) {
        self.item_label_formatter = Some(formatter);
    }

    pub fn clear_item_label_formatter(&mut self) {
        self.item_label_formatter = None;
    }

    #[must_use]
    pub fn format_item_label(&self, value: f64) -> String {
        format_item_label(self.item_label_formatter.as_ref(), value)
    }

    /// Layout of the most recent frame (or `refresh_layout` call).
    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    /// Spacing between `tick_count` ticks across the full chart width.
    #[must_use]
    pub fn vertical_x_step(&self, tick_count: usize) -> f64 {
        self.geometry.step_width(tick_count)
    }

    /// Recomputes the plot area from the current bounds and margins.
    pub fn refresh_layout(&mut self) -> ChartResult<PlotArea> {
        let plot_area = PlotArea::from_margins(self.bounds, self.plot_margins)?;
        self.geometry.set_plot_area(plot_area);
        Ok(plot_area)
    }

    /// Pan-clip padding for the current orientation and axis labels.
    #[must_use]
    pub fn clip_margins(&self) -> ClipMargins {
        self.layers
            .clip_margins(&self.data_axis, &self.category_axis)
    }

    /// Snapshot the next frame would be composited with.
    pub fn frame_snapshot(&mut self) -> ChartResult<FrameSnapshot> {
        let plot_area = self.refresh_layout()?;
        Ok(FrameSnapshot::new(
            plot_area,
            self.clip_margins(),
            self.layers.orientation(),
            self.pan,
            self.layers.is_showing_right_axis(),
        ))
    }

    /// Draws one complete frame.
    ///
    /// The plot background, title and axis titles are drawn first, then the
    /// layers are composited. Panning off runs every layer in place.
    pub fn render_frame(&mut self, surface: &mut dyn DrawingSurface) -> ChartResult<()> {
        let frame = self.frame_snapshot()?;
        debug!(
            plot_width = frame.plot_area.plot().width(),
            plot_height = frame.plot_area.plot().height(),
            pan_enabled = self.pan.is_pan_enabled(),
            "render axis chart frame"
        );

        self.render_background(surface, &frame)?;
        self.title.render(surface, &frame.plot_area)?;
        if let Some(axis_title) = self.axis_title.as_mut() {
            axis_title.set_range(frame.plot_area);
            axis_title.render(surface)?;
        }

        let Self {
            layers,
            data_axis,
            category_axis,
            legend,
            item_label_formatter,
            pan,
            ..
        } = self;
        let mut painter = ChartLayerPainter {
            layers,
            context: LayerContext::new(
                &frame,
                data_axis,
                category_axis,
                legend,
                item_label_formatter.as_ref(),
            ),
        };
        if pan.is_pan_enabled() {
            Compositor::composite(&frame, surface, &mut painter)
        } else {
            Compositor::composite_fixed(surface, &mut painter)
        }
    }

    fn render_background(
        &self,
        surface: &mut dyn DrawingSurface,
        frame: &FrameSnapshot,
    ) -> ChartResult<()> {
        let style = self.render_style;
        if style.plot_background_color.is_transparent() && style.plot_border_width <= 0.0 {
            return Ok(());
        }
        let mut rect = RectPrimitive::from_rect(frame.plot_area.plot(), style.plot_background_color);
        if style.plot_border_width > 0.0 {
            rect = rect.with_border(style.plot_border_width, style.plot_border_color);
        }
        surface.draw_rect(rect)
    }
}

/// Routes compositor layer callbacks to the chart's layer hooks.
struct ChartLayerPainter<'a, 'b, L: ChartLayers> {
    layers: &'a mut L,
    context: LayerContext<'b>,
}

impl<L: ChartLayers> LayerPainter for ChartLayerPainter<'_, '_, L> {
    fn paint(
        &mut self,
        layer: CompositeLayer,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        trace!(layer = layer.name(), "dispatch layer hook");
        let ctx = &mut self.context;
        match layer {
            CompositeLayer::DataAxisBody => {
                self.layers.draw_axis_body(AxisKind::Data, ctx, surface)
            }
            CompositeLayer::CategoryAxisBody => {
                self.layers.draw_axis_body(AxisKind::Category, ctx, surface)
            }
            CompositeLayer::PlotBody => self.layers.draw_plot_body(ctx, surface),
            CompositeLayer::AxisLines => self.layers.draw_axis_lines(ctx, surface),
            CompositeLayer::DataAxisTicks => {
                self.layers.draw_axis_ticks(AxisKind::Data, ctx, surface)
            }
            CompositeLayer::CategoryAxisTicks => {
                self.layers.draw_axis_ticks(AxisKind::Category, ctx, surface)
            }
            CompositeLayer::Legend => self.layers.draw_legend(ctx, surface),
        }
    }
}
