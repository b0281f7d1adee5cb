pub mod daily_count;
pub mod med_change;
pub mod seizure;
pub mod sheet_row;

pub use daily_count::DailyCount;
pub use med_change::MedChange;
pub use seizure::Seizure;
pub use sheet_row::SheetRow;
