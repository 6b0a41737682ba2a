#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_axis::ChartError;
use chart_axis::api::{AxisChart, AxisChartConfig, ChartLayers, LayerContext};
use chart_axis::core::{AxisKind, AxisTick, Orientation, Rect};
use chart_axis::interaction::Translation;
use chart_axis::render::{CairoSurface, Color, DrawingSurface, RectPrimitive};
use chart_axis::ChartResult;

struct BarLayers {
    ticks: Vec<AxisTick>,
}

impl ChartLayers for BarLayers {
    fn orientation(&self) -> Orientation {
        Orientation::Vertical
    }

    fn draw_plot_body(
        &mut self,
        ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        let plot = ctx.plot_area().plot();
        surface.draw_rect(RectPrimitive::new(
            plot.left + 10.0,
            plot.top + 20.0,
            30.0,
            plot.height() - 20.0,
            Color::rgb(0.2, 0.4, 0.8),
        ))
    }

    fn draw_axis_lines(
        &mut self,
        ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        ctx.render_axis_lines(surface)
    }

    fn draw_axis_ticks(
        &mut self,
        axis: AxisKind,
        ctx: &mut LayerContext<'_>,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        if axis == AxisKind::Category {
            ctx.render_visible_axis_labels(axis, &self.ticks, surface)?;
        }
        Ok(())
    }
}

fn layers() -> BarLayers {
    BarLayers {
        ticks: vec![
            AxisTick::new(0, 120.0, 360.0, "North"),
            AxisTick::new(1, 260.0, 360.0, "South"),
        ],
    }
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_surface_renders_panned_frame() {
    let mut surface = CairoSurface::new(600, 400).expect("surface");
    surface.clear(Color::WHITE).expect("clear");
    let mut chart = AxisChart::new(
        layers(),
        AxisChartConfig::new(Rect::new(0.0, 0.0, 600.0, 400.0)),
    )
    .expect("chart init");
    chart.set_translation(Translation::new(25.0, 0.0));

    chart.render_frame(&mut surface).expect("render");
    let stats = surface.last_stats();

    // Background plus one bar.
    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.texts_drawn, 2);
    // Two tick marks plus both axis lines.
    assert_eq!(stats.lines_drawn, 4);
    assert!(stats.max_depth >= 2);
}

#[test]
fn cairo_surface_draws_on_external_context() {
    let image = ImageSurface::create(Format::ARgb32, 320, 240).expect("image surface");
    let context = Context::new(&image).expect("context");
    let mut surface = CairoSurface::for_context(context);
    let mut chart = AxisChart::new(
        layers(),
        AxisChartConfig::new(Rect::new(0.0, 0.0, 320.0, 240.0)),
    )
    .expect("chart init");

    chart.render_frame(&mut surface).expect("render");
    assert!(surface.image().is_none());
    assert!(surface.write_png("unused.png").is_err());
}
