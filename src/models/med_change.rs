use serde::Serialize;

/// A medication change, shown as a marker on the daily chart.
#[derive(Debug, Clone, Serialize)]
pub struct MedChange {
    pub patient: String,    // ⇔ med_changes.patient (TEXT)
    pub timestamp: i64,     // ⇔ med_changes.ts (INTEGER, UTC seconds)
    pub medication: String, // ⇔ med_changes.medication (TEXT)
    pub dosage: String,     // ⇔ med_changes.dosage (TEXT, free text)
    pub notes: String,      // ⇔ med_changes.notes (TEXT)
}
