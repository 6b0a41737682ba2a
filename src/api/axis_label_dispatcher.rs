use crate::core::{AxisKind, AxisTick, Orientation};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::AxisRenderer;

/// Routes each tick to the axis entry point matching the chart orientation.
///
/// Category ticks follow the chart orientation directly. Data ticks use the
/// opposite entry point since the data axis runs perpendicular to the
/// category axis. Each data tick's id is handed to the renderer immediately
/// before that tick is drawn. No ticks draws nothing.
pub fn render_axis_labels<'t>(
    axis: &mut dyn AxisRenderer,
    layer_kind: AxisKind,
    orientation: Orientation,
    ticks: impl IntoIterator<Item = &'t AxisTick>,
    surface: &mut dyn DrawingSurface,
) -> ChartResult<()> {
    for tick in ticks {
        match (layer_kind, orientation) {
            (AxisKind::Category, Orientation::Horizontal) => {
                axis.render_tick_along_horizontal(surface, tick.x, tick.y, &tick.label)?;
            }
            (AxisKind::Category, Orientation::Vertical) => {
                axis.render_tick_along_vertical(surface, tick.x, tick.y, &tick.label)?;
            }
            (AxisKind::Data, Orientation::Horizontal) => {
                axis.set_current_tick_id(tick.id);
                axis.render_tick_along_vertical(surface, tick.x, tick.y, &tick.label)?;
            }
            (AxisKind::Data, Orientation::Vertical) => {
                axis.set_current_tick_id(tick.id);
                axis.render_tick_along_horizontal(surface, tick.x, tick.y, &tick.label)?;
            }
        }
    }
    Ok(())
}
