use std::sync::Arc;

use tracing::warn;

use crate::error::ChartResult;

/// Host-supplied conversion of a data value into item label text.
pub type ItemLabelFormatterFn = Arc<dyn Fn(f64) -> ChartResult<String> + Send + Sync + 'static>;

/// Formats `value` with the installed formatter.
///
/// Without a formatter, or when the formatter fails, the plain decimal
/// rendering of the value is used.
#[must_use]
pub fn format_item_label(formatter: Option<&ItemLabelFormatterFn>, value: f64) -> String {
    let Some(formatter) = formatter else {
        return value.to_string();
    };
    match formatter(value) {
        Ok(text) => text,
        Err(err) => {
            warn!(value, error = %err, "item label formatter failed; using default text");
            value.to_string()
        }
    }
}
