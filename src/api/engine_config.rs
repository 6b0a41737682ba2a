use serde::{Deserialize, Serialize};

use crate::core::{PlotMargins, Rect};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PanMode;

use super::{AxisStyle, LegendConfig, RenderStyle};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisChartConfig {
    /// Outer chart rectangle in surface pixels.
    pub bounds: Rect,
    #[serde(default)]
    pub plot_margins: PlotMargins,
    #[serde(default)]
    pub pan_mode: PanMode,
    #[serde(default = "default_pan_enabled")]
    pub pan_enabled: bool,
    #[serde(default = "default_data_axis_style")]
    pub data_axis_style: AxisStyle,
    #[serde(default = "default_category_axis_style")]
    pub category_axis_style: AxisStyle,
    #[serde(default)]
    pub render_style: RenderStyle,
    #[serde(default)]
    pub legend: LegendConfig,
}

impl AxisChartConfig {
    /// Creates a config with default margins, free panning and default styles.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            plot_margins: PlotMargins::default(),
            pan_mode: PanMode::default(),
            pan_enabled: default_pan_enabled(),
            data_axis_style: default_data_axis_style(),
            category_axis_style: default_category_axis_style(),
            render_style: RenderStyle::default(),
            legend: LegendConfig::default(),
        }
    }

    #[must_use]
    pub fn with_plot_margins(mut self, margins: PlotMargins) -> Self {
        self.plot_margins = margins;
        self
    }

    #[must_use]
    pub fn with_pan_mode(mut self, mode: PanMode) -> Self {
        self.pan_mode = mode;
        self
    }

    #[must_use]
    pub fn with_pan_enabled(mut self, enabled: bool) -> Self {
        self.pan_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_data_axis_style(mut self, style: AxisStyle) -> Self {
        self.data_axis_style = style;
        self
    }

    #[must_use]
    pub fn with_category_axis_style(mut self, style: AxisStyle) -> Self {
        self.category_axis_style = style;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_pan_enabled() -> bool {
    true
}

fn default_data_axis_style() -> AxisStyle {
    AxisStyle::default()
}

fn default_category_axis_style() -> AxisStyle {
    AxisStyle::default()
}
