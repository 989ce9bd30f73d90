//! Rendering of the per-dataset load summary.

use crate::OutputFormat;
use fraudlens_data::LoadStatus;

/// Render load statuses as text lines or a JSON array.
pub(crate) fn render_summary(
    statuses: &[LoadStatus],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(statuses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(statuses),
    }
}
