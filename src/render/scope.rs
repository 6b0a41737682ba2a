use std::ops::{Deref, DerefMut};

use crate::core::Rect;
use crate::error::ChartResult;

use super::DrawingSurface;

/// Saved surface state that is restored when the scope is dropped.
///
/// Restoration runs on every exit path: normal return, `?` propagation and
/// unwinding out of a layer callback.
pub struct SurfaceScope<'a> {
    surface: &'a mut dyn DrawingSurface,
}

impl<'a> SurfaceScope<'a> {
    pub fn open(surface: &'a mut dyn DrawingSurface) -> ChartResult<Self> {
        surface.save_state()?;
        Ok(Self { surface })
    }

    /// Opens a scope and intersects the clip with `clip`.
    pub fn clipped(surface: &'a mut dyn DrawingSurface, clip: Rect) -> ChartResult<Self> {
        let scope = Self::open(surface)?;
        scope.surface.clip_rect(clip)?;
        Ok(scope)
    }
}

impl<'a> Deref for SurfaceScope<'a> {
    type Target = dyn DrawingSurface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl DerefMut for SurfaceScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for SurfaceScope<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.surface.restore_state() {
            tracing::warn!(%err, "failed to restore surface state");
        }
    }
}

impl std::fmt::Debug for SurfaceScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceScope").finish_non_exhaustive()
    }
}

/// Clips to `clip`, translates by `(dx, dy)`, runs `draw`, then restores.
pub fn with_clip_scope<F>(
    surface: &mut dyn DrawingSurface,
    clip: Rect,
    dx: f64,
    dy: f64,
    draw: F,
) -> ChartResult<()>
where
    F: FnOnce(&mut dyn DrawingSurface) -> ChartResult<()>,
{
    let mut scope = SurfaceScope::clipped(surface, clip)?;
    scope.translate(dx, dy)?;
    draw(&mut *scope)
}
