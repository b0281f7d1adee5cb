//! The external spreadsheet mirror: a row-oriented table the diary can
//! copy events into, reached over a webhook API.

pub mod client;

use crate::errors::AppResult;
use crate::models::sheet_row::SheetRow;

pub use client::MirrorClient;

/// The mirror's whole interface: fetch the full table, delete one row.
///
/// `fetch_rows` returns the data rows in order, numbered from 1 with the
/// header excluded; `delete_row` takes that same 1-based index. The store
/// may be edited out-of-band, so snapshots must never be cached across
/// calls.
pub trait Mirror {
    fn fetch_rows(&self) -> AppResult<Vec<SheetRow>>;
    fn delete_row(&self, row_num: usize) -> AppResult<()>;
}
