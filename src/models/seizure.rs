use serde::Serialize;

/// One recorded seizure event.
///
/// `timestamp` is the authoritative instant, in UTC seconds since epoch.
/// `(patient, timestamp)` is unique: the pair is the storage primary key,
/// and CSV ingestion de-collides same-minute rows before insert.
#[derive(Debug, Clone, Serialize)]
pub struct Seizure {
    pub patient: String,    // ⇔ seizures.patient (TEXT, never empty)
    pub timestamp: i64,     // ⇔ seizures.ts (INTEGER, UTC seconds)
    pub duration: i64,      // ⇔ seizures.duration (INTEGER, seconds)
    pub notes: String,      // ⇔ seizures.notes (TEXT, verbatim)
    pub source: String,     // ⇔ seizures.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ seizures.created_at (TEXT, ISO8601)
}

impl Seizure {
    /// Constructor for events created from the CLI.
    pub fn new(patient: &str, timestamp: i64, duration: i64, notes: &str) -> Self {
        Self {
            patient: patient.to_string(),
            timestamp,
            duration,
            notes: notes.to_string(),
            source: "cli".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Notes as shown in lists: provenance prefixes stay, but a single
    /// trailing colon is dropped and empty notes render as "-".
    pub fn display_notes(&self) -> String {
        let n = self.notes.trim();
        let n = n.strip_suffix(':').unwrap_or(n);
        if n.is_empty() {
            "-".to_string()
        } else {
            n.to_string()
        }
    }
}
