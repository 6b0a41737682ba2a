use crate::core::PlotArea;
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, TextHAlign, TextPrimitive, TextVAlign};

/// Chart heading drawn in the top margin, above the plot rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTitle {
    pub text: String,
    pub subtitle: String,
    pub align: TextHAlign,
    pub font_size_px: f64,
    pub color: Color,
}

impl ChartTitle {
    #[must_use]
    pub fn new(font_size_px: f64, color: Color) -> Self {
        Self {
            text: String::new(),
            subtitle: String::new(),
            align: TextHAlign::Center,
            font_size_px,
            color,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    pub fn render(&self, surface: &mut dyn DrawingSurface, area: &PlotArea) -> ChartResult<()> {
        if self.text.is_empty() {
            return Ok(());
        }
        let x = match self.align {
            TextHAlign::Left => area.plot_left(),
            TextHAlign::Center => (area.plot_left() + area.plot_right()) * 0.5,
            TextHAlign::Right => area.plot_right(),
        };
        let has_subtitle = !self.subtitle.is_empty();
        let sub_font = self.font_size_px * 0.75;
        let block_height = if has_subtitle {
            self.font_size_px + 2.0 + sub_font
        } else {
            self.font_size_px
        };
        let top = (area.top() + area.plot_top() - block_height) * 0.5;

        surface.draw_text(
            &TextPrimitive::new(
                self.text.as_str(),
                x,
                top,
                self.font_size_px,
                self.color,
                self.align,
            )
            .with_v_align(TextVAlign::Top),
        )?;
        if has_subtitle {
            surface.draw_text(
                &TextPrimitive::new(
                    self.subtitle.as_str(),
                    x,
                    top + self.font_size_px + 2.0,
                    sub_font,
                    self.color,
                    self.align,
                )
                .with_v_align(TextVAlign::Top),
            )?;
        }
        Ok(())
    }
}

/// Axis captions placed in the chart margins around the plot.
///
/// Created lazily by the chart on first access; drawing requires a range
/// set from the current frame's plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub left_title: String,
    pub lower_title: String,
    pub right_title: String,
    pub font_size_px: f64,
    pub color: Color,
    range: Option<PlotArea>,
}

impl AxisTitle {
    #[must_use]
    pub fn new(font_size_px: f64, color: Color) -> Self {
        Self {
            left_title: String::new(),
            lower_title: String::new(),
            right_title: String::new(),
            font_size_px,
            color,
            range: None,
        }
    }

    pub fn set_range(&mut self, area: PlotArea) {
        self.range = Some(area);
    }

    #[must_use]
    pub fn range(&self) -> Option<PlotArea> {
        self.range
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left_title.is_empty() && self.lower_title.is_empty() && self.right_title.is_empty()
    }

    pub fn render(&self, surface: &mut dyn DrawingSurface) -> ChartResult<()> {
        let Some(area) = self.range else {
            return Ok(());
        };
        let middle_y = (area.plot_top() + area.plot_bottom()) * 0.5;
        let inset = self.font_size_px * 0.5 + 2.0;

        if !self.left_title.is_empty() {
            self.draw(
                surface,
                &self.left_title,
                area.left() + 2.0,
                middle_y,
                TextHAlign::Left,
                TextVAlign::Middle,
            )?;
        }
        if !self.lower_title.is_empty() {
            self.draw(
                surface,
                &self.lower_title,
                (area.plot_left() + area.plot_right()) * 0.5,
                area.bottom() - inset,
                TextHAlign::Center,
                TextVAlign::Middle,
            )?;
        }
        if !self.right_title.is_empty() {
            self.draw(
                surface,
                &self.right_title,
                area.right() - 2.0,
                middle_y,
                TextHAlign::Right,
                TextVAlign::Middle,
            )?;
        }
        Ok(())
    }

    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        text: &str,
        x: f64,
        y: f64,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> ChartResult<()> {
        surface.draw_text(
            &TextPrimitive::new(text, x, y, self.font_size_px, self.color, h_align)
                .with_v_align(v_align),
        )
    }
}
