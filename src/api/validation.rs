use crate::core::{PlotArea, PlotMargins, Rect};
use crate::error::{ChartError, ChartResult};

use super::{AxisChartConfig, AxisStyle, LegendConfig, RenderStyle};

pub(super) fn validate_chart_config(config: &AxisChartConfig) -> ChartResult<()> {
    validate_bounds(config.bounds)?;
    validate_plot_margins(config.plot_margins)?;
    PlotArea::from_margins(config.bounds, config.plot_margins)?;
    validate_axis_style("data_axis_style", &config.data_axis_style)?;
    validate_axis_style("category_axis_style", &config.category_axis_style)?;
    validate_render_style(&config.render_style)?;
    validate_legend_config(&config.legend)
}

pub(super) fn validate_bounds(bounds: Rect) -> ChartResult<()> {
    if !bounds.is_finite() {
        return Err(ChartError::InvalidData(
            "chart bounds must be finite".to_owned(),
        ));
    }
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(ChartError::InvalidData(
            "chart bounds must have a positive width and height".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_plot_margins(margins: PlotMargins) -> ChartResult<()> {
    for (name, value) in [
        ("left", margins.left),
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "plot margin `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_axis_style(axis: &str, style: &AxisStyle) -> ChartResult<()> {
    for (name, value) in [
        ("line_width", style.line_width),
        ("label_font_size_px", style.label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{axis} `{name}` must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("tick_mark_length_px", style.tick_mark_length_px),
        ("label_padding_px", style.label_padding_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{axis} `{name}` must be finite and >= 0"
            )));
        }
    }
    style.line_color.validate()?;
    style.label_color.validate()
}

pub(super) fn validate_render_style(style: &RenderStyle) -> ChartResult<()> {
    for (name, value) in [
        ("title_font_size_px", style.title_font_size_px),
        ("axis_title_font_size_px", style.axis_title_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }
    if !style.plot_border_width.is_finite() || style.plot_border_width < 0.0 {
        return Err(ChartError::InvalidData(
            "render style `plot_border_width` must be finite and >= 0".to_owned(),
        ));
    }
    style.plot_background_color.validate()?;
    style.plot_border_color.validate()?;
    style.title_color.validate()?;
    style.axis_title_color.validate()
}

fn validate_legend_config(legend: &LegendConfig) -> ChartResult<()> {
    if !legend.font_size_px.is_finite() || legend.font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "legend `font_size_px` must be finite and > 0".to_owned(),
        ));
    }
    legend.text_color.validate()?;
    legend.box_color.validate()
}
