use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Rect};
use crate::error::ChartResult;
use crate::render::{
    Color, DrawingSurface, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use super::layout_helpers::estimate_label_text_width_px;

/// Flow direction of legend entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendLayout {
    #[default]
    Row,
    Column,
}

/// Serializable legend setup applied when a chart is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub visible: bool,
    pub layout: LegendLayout,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub show_box: bool,
    pub font_size_px: f64,
    pub text_color: Color,
    pub box_color: Color,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            visible: true,
            layout: LegendLayout::Row,
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Top,
            show_box: false,
            font_size_px: 12.0,
            text_color: Color::rgb(0.2, 0.2, 0.2),
            box_color: Color::rgb(0.6, 0.6, 0.6),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Series legend drawn inside the plot rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    config: LegendConfig,
    entries: Vec<LegendEntry>,
}

const LEGEND_PADDING_PX: f64 = 6.0;
const ENTRY_GAP_PX: f64 = 10.0;

impl Legend {
    #[must_use]
    pub fn new(config: LegendConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> LegendConfig {
        self.config
    }

    pub fn show(&mut self) {
        self.config.visible = true;
    }

    pub fn hide(&mut self) {
        self.config.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.config.visible
    }

    pub fn set_layout(&mut self, layout: LegendLayout) {
        self.config.layout = layout;
    }

    pub fn set_horizontal_align(&mut self, align: TextHAlign) {
        self.config.h_align = align;
    }

    pub fn set_vertical_align(&mut self, align: TextVAlign) {
        self.config.v_align = align;
    }

    pub fn show_box(&mut self) {
        self.config.show_box = true;
    }

    pub fn hide_box(&mut self) {
        self.config.show_box = false;
    }

    pub fn add_entry(&mut self, label: impl Into<String>, color: Color) {
        self.entries.push(LegendEntry {
            label: label.into(),
            color,
        });
    }

    pub fn clear_entries(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Swatch-plus-label extents of each entry.
    fn entry_sizes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let font = self.config.font_size_px;
        self.entries.iter().map(move |entry| {
            let width = font + 4.0 + estimate_label_text_width_px(&entry.label, font);
            (width, font)
        })
    }

    fn content_size(&self) -> (f64, f64) {
        let sizes = self.entry_sizes();
        let gaps = ENTRY_GAP_PX * self.entries.len().saturating_sub(1) as f64;
        match self.config.layout {
            LegendLayout::Row => {
                let (width, height) =
                    sizes.fold((0.0, 0.0_f64), |(w, h), (ew, eh)| (w + ew, h.max(eh)));
                (width + gaps, height)
            }
            LegendLayout::Column => {
                let (width, height) =
                    sizes.fold((0.0_f64, 0.0), |(w, h), (ew, eh)| (w.max(ew), h + eh));
                (width, height + gaps)
            }
        }
    }

    /// Outer bounds of the legend block aligned inside `plot`.
    #[must_use]
    pub fn bounds(&self, plot: Rect) -> Rect {
        let (content_width, content_height) = self.content_size();
        let width = content_width + 2.0 * LEGEND_PADDING_PX;
        let height = content_height + 2.0 * LEGEND_PADDING_PX;
        let left = match self.config.h_align {
            TextHAlign::Left => plot.left,
            TextHAlign::Center => plot.left + (plot.width() - width) * 0.5,
            TextHAlign::Right => plot.right - width,
        };
        let top = match self.config.v_align {
            TextVAlign::Top => plot.top,
            TextVAlign::Middle => plot.top + (plot.height() - height) * 0.5,
            TextVAlign::Bottom => plot.bottom - height,
        };
        Rect::new(left, top, left + width, top + height)
    }

    /// Draws nothing while hidden or empty.
    pub fn render(&self, surface: &mut dyn DrawingSurface, area: &PlotArea) -> ChartResult<()> {
        if !self.config.visible || self.entries.is_empty() {
            return Ok(());
        }
        let bounds = self.bounds(area.plot());
        if self.config.show_box {
            surface.draw_rect(
                RectPrimitive::from_rect(bounds, Color::TRANSPARENT)
                    .with_border(1.0, self.config.box_color),
            )?;
        }

        let font = self.config.font_size_px;
        let mut x = bounds.left + LEGEND_PADDING_PX;
        let mut y = bounds.top + LEGEND_PADDING_PX;
        for (entry, (width, height)) in self.entries.iter().zip(self.entry_sizes()) {
            surface.draw_rect(RectPrimitive::new(x, y, font, font, entry.color))?;
            surface.draw_text(
                &TextPrimitive::new(
                    entry.label.as_str(),
                    x + font + 4.0,
                    y + height * 0.5,
                    font,
                    self.config.text_color,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle),
            )?;
            match self.config.layout {
                LegendLayout::Row => x += width + ENTRY_GAP_PX,
                LegendLayout::Column => y += height + ENTRY_GAP_PX,
            }
        }
        Ok(())
    }
}
