use crate::errors::{AppError, AppResult};
use crate::models::seizure::Seizure;

/// Write events as formatted JSON.
pub fn write_json(path: &str, events: &[Seizure]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(events)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
