use crate::core::Rect;
use crate::error::ChartResult;
use crate::render::{DrawingSurface, LinePrimitive, RectPrimitive, TextPrimitive};

/// Surface that discards drawing, used by benches and headless layout passes.
///
/// It still validates primitives and tracks save/restore depth so invalid
/// geometry and unbalanced scopes surface before a real backend is attached.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub depth: usize,
    pub last_primitive_count: usize,
    pub frames_released: usize,
    primitive_count: usize,
}

impl DrawingSurface for NullSurface {
    fn save_state(&mut self) -> ChartResult<()> {
        self.depth += 1;
        Ok(())
    }

    fn restore_state(&mut self) -> ChartResult<()> {
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn clip_rect(&mut self, _rect: Rect) -> ChartResult<()> {
        Ok(())
    }

    fn translate(&mut self, _dx: f64, _dy: f64) -> ChartResult<()> {
        Ok(())
    }

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        self.primitive_count += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        self.primitive_count += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.primitive_count += 1;
        Ok(())
    }

    fn release_frame_resources(&mut self) {
        self.last_primitive_count = self.primitive_count;
        self.primitive_count = 0;
        self.frames_released += 1;
    }
}
