//! Chart-facing API: the axis-chart frame controller and its components.

mod axis_chart;
mod axis_label_dispatcher;
mod axis_renderer;
mod chart_layers;
mod engine_config;
mod label_formatter;
mod layout_helpers;
mod legend;
mod render_style;
mod titles;
mod validation;

pub use axis_chart::AxisChart;
pub use axis_label_dispatcher::render_axis_labels;
pub use axis_renderer::{AxisRenderer, AxisStyle, CategoryAxis, DataAxis};
pub use chart_layers::{ChartLayers, LayerContext};
pub use engine_config::AxisChartConfig;
pub use label_formatter::{ItemLabelFormatterFn, format_item_label};
pub use layout_helpers::measure_clip_margins;
pub use legend::{Legend, LegendConfig, LegendEntry, LegendLayout};
pub use render_style::RenderStyle;
pub use titles::{AxisTitle, ChartTitle};
