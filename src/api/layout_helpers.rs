use crate::core::{ClipMargins, Orientation};
use crate::render::TextHAlign;

use super::{AxisRenderer, AxisStyle, CategoryAxis, DataAxis};

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Overhang of tick labels past the plot edge, used to widen pan clips.
///
/// Labels of the vertically running axis are centred on their tick, so half
/// the font height spills over. Labels of the horizontally running axis spill
/// by the first label's width, scaled by how far the label extends past its
/// tick. In a horizontal chart the data axis runs horizontally and its label
/// text is unknown until ticks are generated, so no x margin is measured.
#[must_use]
pub fn measure_clip_margins(
    orientation: Orientation,
    data_axis: &DataAxis,
    category_axis: &CategoryAxis,
) -> ClipMargins {
    match orientation {
        Orientation::Vertical => ClipMargins::new(
            first_label_overhang(category_axis),
            half_font_overhang(data_axis.is_showing_labels(), data_axis.style()),
        ),
        Orientation::Horizontal => ClipMargins::new(
            0.0,
            half_font_overhang(category_axis.is_showing_labels(), category_axis.style()),
        ),
    }
}

fn half_font_overhang(showing_labels: bool, style: &AxisStyle) -> f64 {
    if showing_labels {
        style.label_font_size_px * 0.5
    } else {
        0.0
    }
}

fn first_label_overhang(category_axis: &CategoryAxis) -> f64 {
    match category_axis.labels().first() {
        Some(first) if category_axis.is_showing_labels() => {
            let style = category_axis.style();
            let width = estimate_label_text_width_px(first, style.label_font_size_px);
            match style.label_h_align {
                TextHAlign::Left => 0.0,
                TextHAlign::Center => width * 0.5,
                TextHAlign::Right => width,
            }
        }
        _ => 0.0,
    }
}
