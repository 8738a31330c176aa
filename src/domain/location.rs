use chrono::{DateTime, Utc};

/// One submitted location: the caller's reported coordinates, the IP the
/// request appeared to come from, and the moment the server stored it.
/// Records are append-only; nothing in the system updates or deletes them.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub ip: String,
    pub lat: f64,
    pub long: f64,
    pub time: DateTime<Utc>,
}
