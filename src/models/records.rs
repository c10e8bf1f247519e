use serde::{Deserialize, Serialize};

use super::enums::{ReportType, StaffRole};

/// Incident report classified from an inbound SMS body.
///
/// Transient: handed to the storage layer for persistence and then
/// discarded. `station_id` stays `None` when no pattern matched; resolving
/// it against known stations is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub station_id: Option<String>,
}

/// Staff account extracted from one line of document text.
///
/// `password` is a placeholder only — the real credential is issued by the
/// external auth provider. It is left unset by the classifier and filled
/// during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffContact {
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub station_id: Option<String>,
    pub password: Option<String>,
}

/// Voting station extracted from one line of document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub location: String,
}

/// Voter extracted from one line of document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub name: String,
    pub registration_number: String,
    pub station_id: String,
    pub has_voted: bool,
}
