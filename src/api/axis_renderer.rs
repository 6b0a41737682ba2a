use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{
    Color, DrawingSurface, LinePrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

/// Per-tick drawing entry points of one axis.
///
/// "Along horizontal" draws a tick whose mark runs horizontally, i.e. a tick
/// of a vertically running axis; "along vertical" is the converse.
pub trait AxisRenderer {
    fn render_tick_along_horizontal(
        &self,
        surface: &mut dyn DrawingSurface,
        x: f64,
        y: f64,
        label: &str,
    ) -> ChartResult<()>;

    fn render_tick_along_vertical(
        &self,
        surface: &mut dyn DrawingSurface,
        x: f64,
        y: f64,
        label: &str,
    ) -> ChartResult<()>;

    fn is_showing_labels(&self) -> bool;

    /// Identifies the tick about to be drawn, for per-tick styling.
    fn set_current_tick_id(&mut self, id: i32);
}

/// Visual configuration shared by both axis kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub show_labels: bool,
    pub show_tick_marks: bool,
    pub show_axis_line: bool,
    pub line_color: Color,
    pub line_width: f64,
    pub tick_mark_length_px: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    pub label_padding_px: f64,
    /// Alignment of labels under vertical tick marks, relative to the tick.
    pub label_h_align: TextHAlign,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_tick_marks: true,
            show_axis_line: true,
            line_color: Color::rgb(0.33, 0.33, 0.33),
            line_width: 1.0,
            tick_mark_length_px: 6.0,
            label_font_size_px: 12.0,
            label_color: Color::rgb(0.2, 0.2, 0.2),
            label_padding_px: 4.0,
            label_h_align: TextHAlign::Center,
        }
    }
}

/// Continuous-value axis.
///
/// A baseline tick (typically the zero line) can be highlighted: when the id
/// handed over through `set_current_tick_id` matches `baseline_tick_id`, the
/// tick is drawn with `baseline_color`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataAxis {
    style: AxisStyle,
    current_tick_id: Option<i32>,
    baseline_tick_id: Option<i32>,
    baseline_color: Color,
}

impl DataAxis {
    #[must_use]
    pub fn new(style: AxisStyle) -> Self {
        Self {
            style,
            current_tick_id: None,
            baseline_tick_id: None,
            baseline_color: Color::rgb(0.8, 0.1, 0.1),
        }
    }

    #[must_use]
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut AxisStyle {
        &mut self.style
    }

    pub fn show_labels(&mut self) {
        self.style.show_labels = true;
    }

    pub fn hide_labels(&mut self) {
        self.style.show_labels = false;
    }

    #[must_use]
    pub fn current_tick_id(&self) -> Option<i32> {
        self.current_tick_id
    }

    #[must_use]
    pub fn baseline_tick_id(&self) -> Option<i32> {
        self.baseline_tick_id
    }

    pub fn set_baseline_tick(&mut self, id: Option<i32>, color: Color) {
        self.baseline_tick_id = id;
        self.baseline_color = color;
    }

    pub fn render_axis_line(
        &self,
        surface: &mut dyn DrawingSurface,
        from: (f64, f64),
        to: (f64, f64),
    ) -> ChartResult<()> {
        render_axis_line(&self.style, surface, from, to)
    }

    fn tick_color(&self) -> Option<Color> {
        match (self.current_tick_id, self.baseline_tick_id) {
            (Some(current), Some(baseline)) if current == baseline => Some(self.baseline_color),
            _ => None,
        }
    }
}

impl Default for DataAxis {
    fn default() -> Self {
        Self::new(AxisStyle::default())
    }
}

impl AxisRenderer for DataAxis {
    fn render_tick_along_horizontal(
        &self,
        surface: &mut dyn DrawingSurface,
        x: f64,
        y: f64,
        label: &str,
    ) -> ChartResult<()> {
        draw_horizontal_tick(&self.style, self.tick_color(), surface, x, y, label)
    }

    fn render_tick_along_vertical(
        &self,
        surface: &mut dyn DrawingSurface,
        x: f64,
        y: f64,
        label: &str,
    ) -> ChartResult<()> {
        draw_vertical_tick(&self.style, self.tick_color(), surface, x, y, label)
    }

    fn is_showing_labels(&self) -> bool {
        self.style.show_labels
    }

    fn set_current_tick_id(&mut self, id: i32) {
        self.current_tick_id = Some(id);
    }
}

/// Discrete-label axis. Holds the category labels so clip margins can be
/// measured before ticks are generated.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAxis {
    style: AxisStyle,
    labels: Vec<String>,
    current_tick_id: Option<i32>,
}

impl CategoryAxis {
    #[must_use]
    pub fn new(style: AxisStyle) -> Self {
        Self {
            style,
            labels: Vec::new(),
            current_tick_id: None,
        }
    }

    #[must_use]
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut AxisStyle {
        &mut self.style
    }

    pub fn show_labels(&mut self) {
        self.style.show_labels = true;
    }

    pub fn hide_labels(&mut self) {
        self.style.show_labels = false;
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn set_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn current_tick_id(&self) -> Option<i32> {
        self.current_tick_id
    }

    pub fn render_axis_line(
        &self,
        surface: &mut dyn DrawingSurface,
        from: (f64, f64),
        to: (f64, f64),
    ) -> ChartResult<()> {
        render_axis_line(&self.style, surface, from, to)
    }
}

impl Default for CategoryAxis {
    fn default() -> Self {
        Self::new(AxisStyle::default())
    }
}

impl AxisRenderer for CategoryAxis {
    fn render_tick_along_horizontal(
        &self,
        surface: &mut dyn DrawingSurface,
        x: f64,
        y: f64,
        label: &str,
    ) -> ChartResult<()> {
        draw_horizontal_tick(&self.style, None, surface, x, y, label)
    }

    fn render_tick_along_vertical(
        &self,
        surface: &mut dyn DrawingSurface,
        x: f64,
        y: f64,
        label: &str,
    ) -> ChartResult<()> {
        draw_vertical_tick(&self.style, None, surface, x, y, label)
    }

    fn is_showing_labels(&self) -> bool {
        self.style.show_labels
    }

    fn set_current_tick_id(&mut self, id: i32) {
        self.current_tick_id = Some(id);
    }
}

fn render_axis_line(
    style: &AxisStyle,
    surface: &mut dyn DrawingSurface,
    from: (f64, f64),
    to: (f64, f64),
) -> ChartResult<()> {
    if !style.show_axis_line {
        return Ok(());
    }
    surface.draw_line(LinePrimitive::new(
        from.0,
        from.1,
        to.0,
        to.1,
        style.line_width,
        style.line_color,
    ))
}

/// Mark extends left of `(x, y)`; label is right-aligned before the mark.
fn draw_horizontal_tick(
    style: &AxisStyle,
    color_override: Option<Color>,
    surface: &mut dyn DrawingSurface,
    x: f64,
    y: f64,
    label: &str,
) -> ChartResult<()> {
    let mark_length = if style.show_tick_marks {
        style.tick_mark_length_px
    } else {
        0.0
    };
    if style.show_tick_marks {
        surface.draw_line(LinePrimitive::new(
            x - mark_length,
            y,
            x,
            y,
            style.line_width,
            color_override.unwrap_or(style.line_color),
        ))?;
    }
    if style.show_labels && !label.is_empty() {
        surface.draw_text(
            &TextPrimitive::new(
                label,
                x - mark_length - style.label_padding_px,
                y,
                style.label_font_size_px,
                color_override.unwrap_or(style.label_color),
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle),
        )?;
    }
    Ok(())
}

/// Mark extends below `(x, y)`; label sits under the mark.
fn draw_vertical_tick(
    style: &AxisStyle,
    color_override: Option<Color>,
    surface: &mut dyn DrawingSurface,
    x: f64,
    y: f64,
    label: &str,
) -> ChartResult<()> {
    let mark_length = if style.show_tick_marks {
        style.tick_mark_length_px
    } else {
        0.0
    };
    if style.show_tick_marks {
        surface.draw_line(LinePrimitive::new(
            x,
            y,
            x,
            y + mark_length,
            style.line_width,
            color_override.unwrap_or(style.line_color),
        ))?;
    }
    if style.show_labels && !label.is_empty() {
        surface.draw_text(
            &TextPrimitive::new(
                label,
                x,
                y + mark_length + style.label_padding_px,
                style.label_font_size_px,
                color_override.unwrap_or(style.label_color),
                style.label_h_align,
            )
            .with_v_align(TextVAlign::Top),
        )?;
    }
    Ok(())
}
