use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Frame-level colors and fonts not owned by a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub plot_background_color: Color,
    pub plot_border_color: Color,
    pub plot_border_width: f64,
    pub title_font_size_px: f64,
    pub title_color: Color,
    pub axis_title_font_size_px: f64,
    pub axis_title_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            plot_background_color: Color::WHITE,
            plot_border_color: Color::rgb(0.85, 0.85, 0.85),
            plot_border_width: 0.0,
            title_font_size_px: 16.0,
            title_color: Color::rgb(0.1, 0.1, 0.1),
            axis_title_font_size_px: 12.0,
            axis_title_color: Color::rgb(0.25, 0.25, 0.25),
        }
    }
}
