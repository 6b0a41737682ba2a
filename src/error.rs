use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(
        "invalid plot area: plot=({plot_left}, {plot_top}, {plot_right}, {plot_bottom}) \
         must lie inside chart=({left}, {top}, {right}, {bottom})"
    )]
    InvalidPlotArea {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        plot_left: f64,
        plot_top: f64,
        plot_right: f64,
        plot_bottom: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("layer `{layer}` failed: {message}")]
    Layer { layer: &'static str, message: String },

    #[error("drawing backend error: {0}")]
    Backend(String),
}
