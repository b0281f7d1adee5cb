/// One snapshot row from the external spreadsheet mirror.
///
/// The mirror has no stable row identifier: `row_num` is the row's 1-based
/// position among the data rows (header excluded) at fetch time, and shifts
/// whenever any row above it is removed. Snapshots are therefore re-fetched
/// on every reconciliation call and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub row_num: usize,
    pub date_text: String,
    pub duration_text: String,
    pub note_text: String,
}
