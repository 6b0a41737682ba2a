//! Clip-region compositing of the seven chart layers.
//!
//! Each orientation runs a fixed pipeline of scoped clips. A layer whose axis
//! follows the current pan mode is drawn inside a clip widened by the label
//! margins and translated by the effective offset; otherwise it is drawn in
//! place. Axis lines and the legend are never clipped or translated.

use tracing::{debug, trace, warn};

use crate::core::{AxisKind, Orientation, Rect};
use crate::error::ChartResult;

use super::{CompositeLayer, DrawingSurface, FrameSnapshot, SurfaceScope, with_clip_scope};

/// Half-pixel slack so the last plot row/column is not clipped away.
const PLOT_BODY_EDGE_SLACK_PX: f64 = 0.5;

/// Callback invoked once per layer while the compositor holds the layer's
/// clip scope.
pub trait LayerPainter {
    fn paint(&mut self, layer: CompositeLayer, surface: &mut dyn DrawingSurface)
    -> ChartResult<()>;
}

impl<F> LayerPainter for F
where
    F: FnMut(CompositeLayer, &mut dyn DrawingSurface) -> ChartResult<()>,
{
    fn paint(
        &mut self,
        layer: CompositeLayer,
        surface: &mut dyn DrawingSurface,
    ) -> ChartResult<()> {
        self(layer, surface)
    }
}

pub struct Compositor;

impl Compositor {
    /// Runs the pan-aware pipeline for `frame.orientation`.
    ///
    /// A failing layer aborts the frame and its error is returned unchanged;
    /// the surface state stack is restored first and the frame-resource hook
    /// still runs.
    pub fn composite(
        frame: &FrameSnapshot,
        surface: &mut dyn DrawingSurface,
        painter: &mut dyn LayerPainter,
    ) -> ChartResult<()> {
        debug!(
            orientation = ?frame.orientation,
            pan_mode = frame.pan_mode.name(),
            move_x = frame.move_x(),
            move_y = frame.move_y(),
            "composite frame"
        );
        let result = composite_oriented(frame, surface, painter);
        surface.release_frame_resources();
        result
    }

    /// Draws every layer in canonical order without clipping or translation.
    ///
    /// Used while panning is disabled.
    pub fn composite_fixed(
        surface: &mut dyn DrawingSurface,
        painter: &mut dyn LayerPainter,
    ) -> ChartResult<()> {
        debug!("composite fixed frame");
        let result = CompositeLayer::CANONICAL_ORDER
            .into_iter()
            .try_for_each(|layer| paint_layer(painter, layer, surface));
        surface.release_frame_resources();
        result
    }
}

/// Clip for a vertically running axis body: plot width, plot height padded
/// by `y_margin`.
#[must_use]
pub fn vertical_extent_clip(frame: &FrameSnapshot) -> Rect {
    let plot = frame.plot_area.plot();
    Rect::new(
        plot.left,
        plot.top - frame.margins.y_margin,
        plot.right,
        plot.bottom + frame.margins.y_margin,
    )
}

/// Clip for ticks of a vertically running axis. Spans the full chart width
/// so labels beside the plot stay visible.
#[must_use]
pub fn vertical_extent_tick_clip(frame: &FrameSnapshot) -> Rect {
    let chart = frame.plot_area.chart();
    let plot = frame.plot_area.plot();
    Rect::new(
        chart.left,
        plot.top - frame.margins.y_margin,
        chart.right,
        plot.bottom + frame.margins.y_margin,
    )
}

/// Clip for a horizontally running axis: plot width padded by `x_margin`,
/// from the plot top down to the chart bottom.
#[must_use]
pub fn horizontal_extent_clip(frame: &FrameSnapshot) -> Rect {
    let plot = frame.plot_area.plot();
    Rect::new(
        plot.left - frame.margins.x_margin,
        plot.top,
        plot.right + frame.margins.x_margin,
        frame.plot_area.bottom(),
    )
}

/// Clip for the series layer. Without a right axis the plot body may bleed
/// into the right margin up to the chart edge.
#[must_use]
pub fn plot_body_clip(frame: &FrameSnapshot) -> Rect {
    let plot = frame.plot_area.plot();
    let right = if frame.show_right_axis {
        plot.right + PLOT_BODY_EDGE_SLACK_PX
    } else {
        frame.plot_area.right()
    };
    Rect::new(
        plot.left,
        plot.top,
        right,
        plot.bottom + PLOT_BODY_EDGE_SLACK_PX,
    )
}

/// How one axis kind is panned in the current orientation.
struct AxisRun {
    axis: AxisKind,
    pans: bool,
    body_clip: Rect,
    tick_clip: Rect,
    dx: f64,
    dy: f64,
}

impl AxisRun {
    fn resolve(frame: &FrameSnapshot, axis: AxisKind) -> Self {
        let runs_vertically = matches!(
            (frame.orientation, axis),
            (Orientation::Vertical, AxisKind::Data) | (Orientation::Horizontal, AxisKind::Category)
        );
        if runs_vertically {
            Self {
                axis,
                pans: frame.pan_mode.pans_vertically(),
                body_clip: vertical_extent_clip(frame),
                tick_clip: vertical_extent_tick_clip(frame),
                dx: 0.0,
                dy: frame.move_y(),
            }
        } else {
            Self {
                axis,
                pans: frame.pan_mode.pans_horizontally(),
                body_clip: horizontal_extent_clip(frame),
                tick_clip: horizontal_extent_clip(frame),
                dx: frame.move_x(),
                dy: 0.0,
            }
        }
    }
}

/// Both orientations share one layer sequence; only the axis runs differ.
fn composite_oriented(
    frame: &FrameSnapshot,
    surface: &mut dyn DrawingSurface,
    painter: &mut dyn LayerPainter,
) -> ChartResult<()> {
    let runs = [
        AxisRun::resolve(frame, AxisKind::Data),
        AxisRun::resolve(frame, AxisKind::Category),
    ];
    {
        let mut chart_scope = SurfaceScope::clipped(surface, frame.plot_area.chart())?;
        for run in &runs {
            paint_panned(
                painter,
                CompositeLayer::axis_body(run.axis),
                &mut *chart_scope,
                run.pans.then_some(run.body_clip),
                run.dx,
                run.dy,
            )?;
        }
        paint_plot_body(frame, &mut *chart_scope, painter)?;
    }

    paint_layer(painter, CompositeLayer::AxisLines, surface)?;

    for run in &runs {
        paint_panned(
            painter,
            CompositeLayer::axis_ticks(run.axis),
            surface,
            run.pans.then_some(run.tick_clip),
            run.dx,
            run.dy,
        )?;
    }

    paint_layer(painter, CompositeLayer::Legend, surface)
}

fn paint_plot_body(
    frame: &FrameSnapshot,
    surface: &mut dyn DrawingSurface,
    painter: &mut dyn LayerPainter,
) -> ChartResult<()> {
    let mut clip_scope = SurfaceScope::clipped(surface, plot_body_clip(frame))?;
    let mut pan_scope = SurfaceScope::open(&mut *clip_scope)?;
    pan_scope.translate(frame.move_x(), frame.move_y())?;
    paint_layer(painter, CompositeLayer::PlotBody, &mut *pan_scope)?;
    Ok(())
}

/// Draws `layer` inside `clip` translated by `(dx, dy)`, or in place when the
/// layer's axis does not pan this frame (`clip == None`).
fn paint_panned(
    painter: &mut dyn LayerPainter,
    layer: CompositeLayer,
    surface: &mut dyn DrawingSurface,
    clip: Option<Rect>,
    dx: f64,
    dy: f64,
) -> ChartResult<()> {
    match clip {
        Some(clip) => with_clip_scope(surface, clip, dx, dy, |surface| {
            paint_layer(painter, layer, surface)
        }),
        None => paint_layer(painter, layer, surface),
    }
}

fn paint_layer(
    painter: &mut dyn LayerPainter,
    layer: CompositeLayer,
    surface: &mut dyn DrawingSurface,
) -> ChartResult<()> {
    trace!(layer = layer.name(), "paint layer");
    painter.paint(layer, surface).inspect_err(|err| {
        warn!(layer = layer.name(), %err, "layer paint failed");
    })
}
