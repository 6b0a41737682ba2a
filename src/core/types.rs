use serde::{Deserialize, Serialize};

/// Which screen dimension the category axis runs along.
///
/// `Vertical` charts (column bars, line charts) run the category axis
/// horizontally and the data axis vertically; `Horizontal` charts swap them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// The two orthogonal axes of a cartesian chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    /// Continuous-value axis.
    Data,
    /// Discrete-label axis.
    Category,
}

impl AxisKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Category => "category",
        }
    }
}

/// One precomputed tick: screen position plus its formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub id: i32,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl AxisTick {
    #[must_use]
    pub fn new(id: i32, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            id,
            x,
            y,
            label: label.into(),
        }
    }
}

/// Clip padding that keeps partially visible tick labels from being hard-cut.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipMargins {
    pub x_margin: f64,
    pub y_margin: f64,
}

impl ClipMargins {
    #[must_use]
    pub const fn new(x_margin: f64, y_margin: f64) -> Self {
        Self { x_margin, y_margin }
    }
}
