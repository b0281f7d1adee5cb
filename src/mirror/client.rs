//! Blocking HTTP client for the spreadsheet mirror webhook.

use super::Mirror;
use crate::errors::{AppError, AppResult};
use crate::models::sheet_row::SheetRow;
use std::time::Duration;

pub struct MirrorClient {
    url: String,
    http: reqwest::blocking::Client,
}

impl MirrorClient {
    pub fn new(url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::MirrorFetch(e.to_string()))?;

        Ok(Self {
            url: url.to_string(),
            http,
        })
    }
}

impl Mirror for MirrorClient {
    /// GET the full table. The body is a JSON array of
    /// `[date, duration, note]` string triples, header row first.
    fn fetch_rows(&self) -> AppResult<Vec<SheetRow>> {
        let rows: Vec<[String; 3]> = self
            .http
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| AppError::MirrorFetch(e.to_string()))?;

        Ok(rows
            .into_iter()
            .skip(1) // header row
            .enumerate()
            .map(|(i, [date_text, duration_text, note_text])| SheetRow {
                row_num: i + 1,
                date_text,
                duration_text,
                note_text,
            })
            .collect())
    }

    /// DELETE one data row by its current 1-based index.
    fn delete_row(&self, row_num: usize) -> AppResult<()> {
        self.http
            .delete(&self.url)
            .json(&serde_json::json!({ "rowNum": row_num }))
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::MirrorDelete {
                row: row_num,
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
