use serde::{Deserialize, Serialize};

/// Screen directions that respond to interactive translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanMode {
    /// Both directions pan.
    #[default]
    Free,
    /// Only horizontal translation is applied.
    Horizontal,
    /// Only vertical translation is applied.
    Vertical,
    /// Translation is ignored.
    None,
}

impl PanMode {
    #[must_use]
    pub fn pans_horizontally(self) -> bool {
        matches!(self, Self::Free | Self::Horizontal)
    }

    #[must_use]
    pub fn pans_vertically(self) -> bool {
        matches!(self, Self::Free | Self::Vertical)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Two-component pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Session-lifetime pan configuration plus the raw translation written by
/// input handlers between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanState {
    mode: PanMode,
    enabled: bool,
    interaction: InteractionMode,
    translation: Translation,
}

impl Default for PanState {
    fn default() -> Self {
        Self {
            mode: PanMode::Free,
            enabled: true,
            interaction: InteractionMode::Idle,
            translation: Translation::ZERO,
        }
    }
}

impl PanState {
    #[must_use]
    pub fn new(mode: PanMode, enabled: bool) -> Self {
        Self {
            mode,
            enabled,
            ..Self::default()
        }
    }

    pub fn set_pan_mode(&mut self, mode: PanMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn pan_mode(self) -> PanMode {
        self.mode
    }

    pub fn enable_pan(&mut self) {
        self.enabled = true;
    }

    pub fn disable_pan(&mut self) {
        self.enabled = false;
        self.interaction = InteractionMode::Idle;
    }

    #[must_use]
    pub fn is_pan_enabled(self) -> bool {
        self.enabled
    }

    /// Mode that gates clipping this frame: `None` while pan is disabled.
    #[must_use]
    pub fn effective_mode(self) -> PanMode {
        if self.enabled { self.mode } else { PanMode::None }
    }

    #[must_use]
    pub fn translation(self) -> Translation {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Translation) {
        self.translation = translation;
    }

    pub fn reset_translation(&mut self) {
        self.translation = Translation::ZERO;
    }

    #[must_use]
    pub fn interaction_mode(self) -> InteractionMode {
        self.interaction
    }

    pub fn on_pan_start(&mut self) {
        if self.enabled {
            self.interaction = InteractionMode::Panning;
        }
    }

    /// Accumulates a gesture delta into the raw translation.
    ///
    /// Deltas outside an active pan gesture are ignored.
    pub fn on_pan_move(&mut self, delta_x: f64, delta_y: f64) {
        if self.interaction != InteractionMode::Panning {
            return;
        }
        if !delta_x.is_finite() || !delta_y.is_finite() {
            tracing::warn!(delta_x, delta_y, "ignore non-finite pan delta");
            return;
        }
        self.translation.x += delta_x;
        self.translation.y += delta_y;
    }

    pub fn on_pan_end(&mut self) {
        self.interaction = InteractionMode::Idle;
    }

    /// Zeroes the components of `raw` not permitted by the effective mode.
    #[must_use]
    pub fn resolve_effective_offset(self, raw: Translation) -> Translation {
        match self.effective_mode() {
            PanMode::Free => raw,
            PanMode::Horizontal => Translation::new(raw.x, 0.0),
            PanMode::Vertical => Translation::new(0.0, raw.y),
            PanMode::None => Translation::ZERO,
        }
    }

    /// Effective offset for the translation currently held by this state.
    #[must_use]
    pub fn effective_offset(self) -> Translation {
        self.resolve_effective_offset(self.translation)
    }
}
