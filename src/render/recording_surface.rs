use smallvec::SmallVec;

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, LinePrimitive, RectPrimitive, TextPrimitive};

/// Translation and clip in effect when a primitive was drawn, in absolute
/// surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceState {
    pub origin_x: f64,
    pub origin_y: f64,
    pub clip: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedPrimitive {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

/// One call observed by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    /// Clip rectangle as passed by the caller (local coordinates).
    Clip(Rect),
    Translate {
        dx: f64,
        dy: f64,
    },
    Draw {
        primitive: RecordedPrimitive,
        state: SurfaceState,
    },
    ReleaseFrameResources,
}

/// Headless surface that records every call in order.
///
/// Used by tests and by hosts that replay frames onto another backend. Draw
/// calls are validated so invalid geometry fails the frame the same way a
/// real backend would.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    stack: SmallVec<[SurfaceState; 8]>,
    current: SurfaceState,
    max_depth: usize,
    save_count: usize,
    restore_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.current
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    #[must_use]
    pub fn restore_count(&self) -> usize {
        self.restore_count
    }

    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.save_count == self.restore_count
    }

    #[must_use]
    pub fn release_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::ReleaseFrameResources))
            .count()
    }

    pub fn primitives(&self) -> impl Iterator<Item = (&RecordedPrimitive, SurfaceState)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Draw { primitive, state } => Some((primitive, *state)),
            _ => None,
        })
    }

    /// Drawn labels, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> + '_ {
        self.primitives().filter_map(|(primitive, _)| match primitive {
            RecordedPrimitive::Text(text) => Some(text),
            _ => None,
        })
    }

    fn record_draw(&mut self, primitive: RecordedPrimitive) {
        self.ops.push(SurfaceOp::Draw {
            primitive,
            state: self.current,
        });
    }
}

impl DrawingSurface for RecordingSurface {
    fn save_state(&mut self) -> ChartResult<()> {
        self.stack.push(self.current);
        self.max_depth = self.max_depth.max(self.stack.len());
        self.save_count += 1;
        self.ops.push(SurfaceOp::Save);
        Ok(())
    }

    fn restore_state(&mut self) -> ChartResult<()> {
        let Some(previous) = self.stack.pop() else {
            return Err(ChartError::Backend(
                "restore without matching save".to_owned(),
            ));
        };
        self.current = previous;
        self.restore_count += 1;
        self.ops.push(SurfaceOp::Restore);
        Ok(())
    }

    fn clip_rect(&mut self, rect: Rect) -> ChartResult<()> {
        if !rect.is_finite() {
            return Err(ChartError::InvalidData(
                "clip rectangle must be finite".to_owned(),
            ));
        }
        let absolute = rect.translated(self.current.origin_x, self.current.origin_y);
        self.current.clip = Some(match self.current.clip {
            Some(clip) => clip.intersection(absolute),
            None => absolute.normalized(),
        });
        self.ops.push(SurfaceOp::Clip(rect));
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ChartError::InvalidData(
                "translation must be finite".to_owned(),
            ));
        }
        self.current.origin_x += dx;
        self.current.origin_y += dy;
        self.ops.push(SurfaceOp::Translate { dx, dy });
        Ok(())
    }

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        self.record_draw(RecordedPrimitive::Line(line));
        Ok(())
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        self.record_draw(RecordedPrimitive::Rect(rect));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.record_draw(RecordedPrimitive::Text(text.clone()));
        Ok(())
    }

    fn release_frame_resources(&mut self) {
        self.ops.push(SurfaceOp::ReleaseFrameResources);
    }
}
