use std::sync::Arc;

use approx::assert_relative_eq;
use chart_axis::api::{
    AxisChart, AxisChartConfig, CategoryAxis, ChartLayers, DataAxis, ItemLabelFormatterFn,
    LayerContext, measure_clip_margins,
};
use chart_axis::core::{AxisKind, AxisTick, ClipMargins, Orientation, PlotMargins, Rect};
use chart_axis::render::compositor::horizontal_extent_clip;
use chart_axis::interaction::{PanMode, Translation};
use chart_axis::render::{
    Color, DrawingSurface, RecordedPrimitive, RecordingSurface, SurfaceState, TextHAlign,
    TextPrimitive,
};
use chart_axis::{ChartError, ChartResult};

/// Draws one marker label per layer so tests can inspect the surface state
/// each layer was drawn under.
struct MarkerLayers {
    orientation: Orientation,
    right_axis: bool,
    failing_layer: Option<&'static str>,
    clip_margins: Option<ClipMargins>,
    data_ticks: Vec<AxisTick>,
    category_ticks: Vec<AxisTick>,
}

impl MarkerLayers {
    fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            right_axis: false,
            failing_layer: None,
            clip_margins: None,
            data_ticks: Vec::new(),
            category_ticks: Vec::new(),
        }
    }

    fn mark(&self, name: &'static str, surface: &mut dyn DrawingSurface) -> ChartResult<()> {
        if self.failing_layer == Some(name) {
            return Err(ChartError::Layer {
                layer: name,
                message: "marker failure".to_owned(),
            });
        }
        surface.draw_text(&TextPrimitive::new(
            name,
            100.0,
            100.0,
            10.0,
            Color::BLACK,
            TextHAlign::Left,
        ))
    }
}

impl ChartLayers for MarkerLayers {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn is_showing_right_axis(&self) -> bool {
        self.right_axis
    }

    fn clip_margins(&self, data_axis: &DataAxis, category_axis: &CategoryAxis) -> ClipMargins {
        self.clip_margins
            .unwrap_or_else(|| measure_clip_margins(self.orientation, data_axis, category_axis))
    }

    fn draw_axis_body(
        &mut self,
        axis: AxisKind,
        _ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        match axis {
            AxisKind::Data => self.mark("data_body", surface),
            AxisKind::Category => self.mark("category_body", surface),
        }
    }

    fn draw_plot_body(
        &mut self,
        ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        self.mark("plot_body", surface)?;
        let label = ctx.format_item_label(42.5);
        surface.draw_text(&TextPrimitive::new(
            label,
            120.0,
            80.0,
            10.0,
            Color::BLACK,
            TextHAlign::Center,
        ))
    }

    fn draw_axis_lines(
        &mut self,
        _ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        self.mark("axis_lines", surface)
    }

    fn draw_axis_ticks(
        &mut self,
        axis: AxisKind,
        ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        let ticks = match axis {
            AxisKind::Data => {
                self.mark("data_ticks", surface)?;
                &self.data_ticks
            }
            AxisKind::Category => {
                self.mark("category_ticks", surface)?;
                &self.category_ticks
            }
        };
        ctx.render_visible_axis_labels(axis, ticks, surface)
    }

    fn draw_legend(
        &mut self,
        _ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        self.mark("legend", surface)
    }
}

fn config() -> AxisChartConfig {
    AxisChartConfig::new(Rect::new(0.0, 0.0, 300.0, 200.0))
        .with_plot_margins(PlotMargins::new(40.0, 20.0, 20.0, 30.0))
}

fn chart(layers: MarkerLayers) -> AxisChart<MarkerLayers> {
    AxisChart::new(layers, config()).expect("chart init")
}

fn state_of(surface: &RecordingSurface, name: &str) -> SurfaceState {
    surface
        .primitives()
        .find_map(|(primitive, state)| match primitive {
            RecordedPrimitive::Text(text) if text.text == name => Some(state),
            _ => None,
        })
        .unwrap_or_else(|| panic!("layer `{name}` was not drawn"))
}

fn labels(surface: &RecordingSurface) -> Vec<String> {
    surface.texts().map(|text| text.text.clone()).collect()
}

#[test]
fn layers_draw_in_canonical_order() {
    let mut chart = chart(MarkerLayers::new(Orientation::Vertical));
    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");

    let markers: Vec<_> = labels(&surface)
        .into_iter()
        .filter(|label| label != "42.5")
        .collect();
    assert_eq!(
        markers,
        vec![
            "data_body",
            "category_body",
            "plot_body",
            "axis_lines",
            "data_ticks",
            "category_ticks",
            "legend",
        ]
    );
    assert!(surface.is_balanced());
    assert_eq!(surface.release_count(), 1);
}

#[test]
fn free_pan_translates_plot_body_and_both_axes() {
    let mut chart = chart(MarkerLayers::new(Orientation::Vertical));
    chart.set_translation(Translation::new(15.0, -8.0));
    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");

    let plot = state_of(&surface, "plot_body");
    assert_eq!((plot.origin_x, plot.origin_y), (15.0, -8.0));
    assert_eq!(plot.clip, Some(Rect::new(40.0, 20.0, 300.0, 170.5)));

    let data_body = state_of(&surface, "data_body");
    assert_eq!((data_body.origin_x, data_body.origin_y), (0.0, -8.0));
    let category_ticks = state_of(&surface, "category_ticks");
    assert_eq!(
        (category_ticks.origin_x, category_ticks.origin_y),
        (15.0, 0.0)
    );

    let lines = state_of(&surface, "axis_lines");
    assert_eq!(lines, SurfaceState::default());
    assert_eq!(state_of(&surface, "legend"), SurfaceState::default());
}

#[test]
fn horizontal_only_pan_leaves_data_axis_in_place() {
    let mut chart = chart(MarkerLayers::new(Orientation::Vertical));
    chart.set_pan_mode(PanMode::Horizontal);
    chart.set_translation(Translation::new(15.0, -8.0));
    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");

    let plot = state_of(&surface, "plot_body");
    assert_eq!((plot.origin_x, plot.origin_y), (15.0, 0.0));

    let data_ticks = state_of(&surface, "data_ticks");
    assert_eq!(data_ticks, SurfaceState::default());
}

#[test]
fn horizontal_chart_pans_data_axis_along_x() {
    let mut chart = chart(MarkerLayers::new(Orientation::Horizontal));
    chart.set_pan_mode(PanMode::Horizontal);
    chart.set_translation(Translation::new(10.0, 5.0));
    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");

    let data_body = state_of(&surface, "data_body");
    assert_eq!((data_body.origin_x, data_body.origin_y), (10.0, 0.0));
    let category_body = state_of(&surface, "category_body");
    assert_eq!((category_body.origin_x, category_body.origin_y), (0.0, 0.0));
}

#[test]
fn right_axis_narrows_plot_body_clip() {
    let mut with_axis = MarkerLayers::new(Orientation::Vertical);
    with_axis.right_axis = true;

    let mut surface = RecordingSurface::new();
    chart(with_axis).render_frame(&mut surface).expect("frame");
    let clip = state_of(&surface, "plot_body").clip.expect("clipped");
    assert_relative_eq!(clip.right, 280.5);

    let mut surface = RecordingSurface::new();
    chart(MarkerLayers::new(Orientation::Vertical))
        .render_frame(&mut surface)
        .expect("frame");
    let clip = state_of(&surface, "plot_body").clip.expect("clipped");
    assert_relative_eq!(clip.right, 300.0);
}

#[test]
fn failing_layer_error_propagates_with_balanced_state() {
    for name in [
        "data_body",
        "category_body",
        "plot_body",
        "axis_lines",
        "data_ticks",
        "category_ticks",
        "legend",
    ] {
        let mut layers = MarkerLayers::new(Orientation::Vertical);
        layers.failing_layer = Some(name);
        let mut chart = chart(layers);
        chart.set_translation(Translation::new(3.0, 4.0));

        let mut surface = RecordingSurface::new();
        let err = chart.render_frame(&mut surface).expect_err("layer fails");
        assert!(matches!(err, ChartError::Layer { layer, .. } if layer == name));
        assert!(surface.is_balanced(), "unbalanced after `{name}` failed");
        assert_eq!(surface.release_count(), 1);
    }
}

#[test]
fn repeated_frames_produce_identical_output() {
    let mut layers = MarkerLayers::new(Orientation::Vertical);
    layers.category_ticks = vec![AxisTick::new(0, 60.0, 170.0, "Jan")];
    let mut chart = chart(layers);
    chart.set_translation(Translation::new(7.0, 2.0));
    chart.title_mut().set_text("Sales");

    let mut first = RecordingSurface::new();
    chart.render_frame(&mut first).expect("first frame");
    let mut second = RecordingSurface::new();
    chart.render_frame(&mut second).expect("second frame");

    assert_eq!(first.ops(), second.ops());
}

#[test]
fn panned_out_ticks_are_not_drawn() {
    let mut layers = MarkerLayers::new(Orientation::Vertical);
    layers.data_ticks = vec![
        AxisTick::new(0, 40.0, 170.0, "0"),
        AxisTick::new(1, 40.0, 95.0, "50"),
        AxisTick::new(2, 40.0, 20.0, "100"),
    ];
    layers.category_ticks = vec![
        AxisTick::new(0, 60.0, 170.0, "Jan"),
        AxisTick::new(1, 260.0, 170.0, "Dec"),
    ];
    let mut chart = chart(layers);
    // Data bounds become [-10, 140]; category bounds become [10, 250].
    chart.set_translation(Translation::new(30.0, 30.0));
    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");

    let drawn = labels(&surface);
    assert!(drawn.contains(&"50".to_owned()));
    assert!(drawn.contains(&"100".to_owned()));
    assert!(!drawn.contains(&"0".to_owned()));
    assert!(drawn.contains(&"Jan".to_owned()));
    assert!(!drawn.contains(&"Dec".to_owned()));
    assert_eq!(chart.data_axis().current_tick_id(), Some(2));
}

#[test]
fn hidden_category_labels_cull_every_category_tick() {
    let mut layers = MarkerLayers::new(Orientation::Vertical);
    layers.category_ticks = vec![
        AxisTick::new(0, 60.0, 170.0, "Jan"),
        AxisTick::new(1, 120.0, 170.0, "Feb"),
    ];
    let mut chart = chart(layers);
    chart.category_axis_mut().hide_labels();
    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");

    let drawn = labels(&surface);
    assert!(!drawn.iter().any(|label| label == "Jan" || label == "Feb"));
    // Culled ticks draw no tick marks either.
    let category_lines = surface
        .primitives()
        .filter(|(primitive, _)| matches!(primitive, RecordedPrimitive::Line(_)))
        .count();
    assert_eq!(category_lines, 0);
}

#[test]
fn failing_item_label_formatter_falls_back_to_plain_value() {
    let mut chart = chart(MarkerLayers::new(Orientation::Vertical));
    let formatter: ItemLabelFormatterFn =
        Arc::new(|_: f64| Err(ChartError::InvalidData("broken pattern".to_owned())));
    chart.set_item_label_formatter(formatter);

    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");
    assert!(labels(&surface).contains(&"42.5".to_owned()));

    let formatter: ItemLabelFormatterFn = Arc::new(|value: f64| Ok(format!("${value:.2}")));
    chart.set_item_label_formatter(formatter);
    assert_eq!(chart.format_item_label(42.5), "$42.50");
}

#[test]
fn pan_gestures_accumulate_translation() {
    let mut chart = chart(MarkerLayers::new(Orientation::Vertical));
    chart.pan_start();
    chart.pan_move(4.0, -2.0);
    chart.pan_move(1.5, 0.5);
    chart.pan_end();
    assert_eq!(chart.translation(), Translation::new(5.5, -1.5));

    chart.disable_pan();
    chart.pan_start();
    chart.pan_move(100.0, 100.0);
    assert_eq!(chart.translation(), Translation::new(5.5, -1.5));
}

#[test]
fn horizontal_chart_keeps_category_label_width_out_of_data_clip() {
    let config = AxisChartConfig::new(Rect::new(0.0, 0.0, 400.0, 300.0))
        .with_plot_margins(PlotMargins::new(40.0, 20.0, 20.0, 30.0));
    let mut chart =
        AxisChart::new(MarkerLayers::new(Orientation::Horizontal), config).expect("chart init");
    chart.set_pan_mode(PanMode::Horizontal);
    chart.set_translation(Translation::new(12.0, 0.0));
    chart
        .category_axis_mut()
        .set_labels(["A very long category name"]);

    let margins = chart.clip_margins();
    assert_eq!((margins.x_margin, margins.y_margin), (0.0, 6.0));

    let frame = chart.frame_snapshot().expect("snapshot");
    assert_eq!(
        horizontal_extent_clip(&frame),
        Rect::new(40.0, 20.0, 380.0, 300.0)
    );

    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");
    let data_ticks = state_of(&surface, "data_ticks");
    assert_eq!(data_ticks.clip, Some(Rect::new(40.0, 20.0, 380.0, 300.0)));
    assert_eq!((data_ticks.origin_x, data_ticks.origin_y), (12.0, 0.0));
}

#[test]
fn chart_layers_can_override_clip_margins() {
    let mut layers = MarkerLayers::new(Orientation::Vertical);
    layers.clip_margins = Some(ClipMargins::new(5.0, 9.0));
    let mut chart = chart(layers);
    assert_eq!(chart.clip_margins(), ClipMargins::new(5.0, 9.0));

    let mut surface = RecordingSurface::new();
    chart.render_frame(&mut surface).expect("frame");
    // Data axis body clip: plot width, plot height padded by the y margin.
    let data_body = state_of(&surface, "data_body").clip.expect("clipped");
    assert_eq!(data_body, Rect::new(40.0, 11.0, 280.0, 179.0));
}
