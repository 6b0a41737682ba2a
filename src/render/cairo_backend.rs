use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use tracing::warn;

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingSurface, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub max_depth: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Wraps either an owned offscreen image surface or an external Cairo context
/// (for example one handed to a GTK `DrawingArea` draw callback). State,
/// clipping and translation map directly onto Cairo's own state stack.
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    depth: usize,
    frame_stats: CairoSurfaceStats,
    last_stats: CairoSurfaceStats,
}

impl CairoSurface {
    /// Creates an offscreen ARGB32 surface.
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
            depth: 0,
            frame_stats: CairoSurfaceStats::default(),
            last_stats: CairoSurfaceStats::default(),
        })
    }

    /// Draws into a context owned by the host.
    #[must_use]
    pub fn for_context(context: Context) -> Self {
        Self {
            context,
            image: None,
            depth: 0,
            frame_stats: CairoSurfaceStats::default(),
            last_stats: CairoSurfaceStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    /// Counters of the last completed frame.
    #[must_use]
    pub fn last_stats(&self) -> CairoSurfaceStats {
        self.last_stats
    }

    /// Fills the whole target with `color`, ignoring the current clip.
    pub fn clear(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        self.context.reset_clip();
        apply_color(&self.context, color);
        let painted = self
            .context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err));
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        painted
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let Some(image) = self.image.as_ref() else {
            return Err(ChartError::Backend(
                "png export needs an offscreen surface".to_owned(),
            ));
        };
        let mut file = File::create(path.as_ref())
            .map_err(|err| ChartError::Backend(format!("failed to create png file: {err}")))?;
        image
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }
}

impl std::fmt::Debug for CairoSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CairoSurface")
            .field("offscreen", &self.image.is_some())
            .field("depth", &self.depth)
            .field("last_stats", &self.last_stats)
            .finish_non_exhaustive()
    }
}

impl DrawingSurface for CairoSurface {
    fn save_state(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        self.depth += 1;
        self.frame_stats.max_depth = self.frame_stats.max_depth.max(self.depth);
        Ok(())
    }

    fn restore_state(&mut self) -> ChartResult<()> {
        if self.depth == 0 {
            return Err(ChartError::Backend(
                "restore_state without matching save_state".to_owned(),
            ));
        }
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        self.depth -= 1;
        Ok(())
    }

    fn clip_rect(&mut self, clip: Rect) -> ChartResult<()> {
        let bounds = clip.normalized();
        self.context
            .rectangle(bounds.left, bounds.top, bounds.width(), bounds.height());
        self.context.clip();
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ChartError::InvalidData(
                "translation must be finite".to_owned(),
            ));
        }
        self.context.translate(dx, dy);
        Ok(())
    }

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        apply_color(&self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.frame_stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        append_rect_path(&self.context, rect);
        apply_color(&self.context, rect.fill_color);
        if rect.border_width > 0.0 {
            self.context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            apply_color(&self.context, rect.border_color);
            self.context.set_line_width(rect.border_width);
            self.context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
        } else {
            self.context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }
        self.frame_stats.rects_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description =
            FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = match text.v_align {
            TextVAlign::Top => text.y,
            TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
            TextVAlign::Bottom => text.y - f64::from(text_height),
        };

        apply_color(&self.context, text.color);
        self.context.move_to(x, y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.frame_stats.texts_drawn += 1;
        Ok(())
    }

    fn release_frame_resources(&mut self) {
        if self.depth != 0 {
            warn!(depth = self.depth, "cairo state stack not empty at frame end");
        }
        self.context.target().flush();
        self.last_stats = std::mem::take(&mut self.frame_stats);
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
