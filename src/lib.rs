//! chart-axis: axis-chart compositing engine.
//!
//! Lays out a plot rectangle inside the chart bounds, resolves the pan offset
//! and draws the seven chart layers (axis bodies, plot body, axis lines,
//! ticks and legend) through clip regions so panned content never bleeds
//! past the plot edges. Drawing goes through the `DrawingSurface` trait; the
//! optional `cairo-backend` feature provides a Cairo/Pango implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{AxisChart, AxisChartConfig, ChartLayers, LayerContext};
pub use error::{ChartError, ChartResult};
