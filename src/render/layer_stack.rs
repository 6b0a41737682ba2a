use serde::{Deserialize, Serialize};

use crate::core::AxisKind;

/// Independently drawn layers of one composited frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeLayer {
    DataAxisBody,
    CategoryAxisBody,
    PlotBody,
    AxisLines,
    DataAxisTicks,
    CategoryAxisTicks,
    Legend,
}

impl CompositeLayer {
    /// Draw order shared by both orientations: axis bodies, plot, axis lines,
    /// ticks, legend. Later layers paint over earlier ones.
    pub const CANONICAL_ORDER: [Self; 7] = [
        Self::DataAxisBody,
        Self::CategoryAxisBody,
        Self::PlotBody,
        Self::AxisLines,
        Self::DataAxisTicks,
        Self::CategoryAxisTicks,
        Self::Legend,
    ];

    #[must_use]
    pub fn axis_body(axis: AxisKind) -> Self {
        match axis {
            AxisKind::Data => Self::DataAxisBody,
            AxisKind::Category => Self::CategoryAxisBody,
        }
    }

    #[must_use]
    pub fn axis_ticks(axis: AxisKind) -> Self {
        match axis {
            AxisKind::Data => Self::DataAxisTicks,
            AxisKind::Category => Self::CategoryAxisTicks,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DataAxisBody => "data_axis_body",
            Self::CategoryAxisBody => "category_axis_body",
            Self::PlotBody => "plot_body",
            Self::AxisLines => "axis_lines",
            Self::DataAxisTicks => "data_axis_ticks",
            Self::CategoryAxisTicks => "category_axis_ticks",
            Self::Legend => "legend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CompositeLayer;
    use crate::core::AxisKind;

    #[test]
    fn canonical_order_keeps_ticks_above_axis_lines_and_legend_on_top() {
        let order = CompositeLayer::CANONICAL_ORDER;
        let position = |layer| order.iter().position(|candidate| *candidate == layer);
        assert!(position(CompositeLayer::AxisLines) < position(CompositeLayer::DataAxisTicks));
        assert!(position(CompositeLayer::AxisLines) < position(CompositeLayer::CategoryAxisTicks));
        assert_eq!(order.last(), Some(&CompositeLayer::Legend));
    }

    #[test]
    fn axis_helpers_map_to_layer_variants() {
        assert_eq!(
            CompositeLayer::axis_body(AxisKind::Category),
            CompositeLayer::CategoryAxisBody
        );
        assert_eq!(
            CompositeLayer::axis_ticks(AxisKind::Data),
            CompositeLayer::DataAxisTicks
        );
    }
}
