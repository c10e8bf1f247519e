// Post-classification validation, applied before records are handed to the
// storage layer. Partitions input into kept records and skip reasons; a bad
// record never aborts the batch.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::IntakeConfig;
use crate::models::{StaffContact, StaffRole, StationRecord, VoterRecord};

/// Maximum station name length accepted by the storage schema.
const MAX_STATION_NAME: usize = 255;

/// Maximum station location length accepted by the storage schema.
const MAX_STATION_LOCATION: usize = 500;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").unwrap());

/// Result of a validation pass: kept records plus one reason per drop.
#[derive(Debug, Clone)]
pub struct Validated<T> {
    pub records: Vec<T>,
    pub skipped: Vec<String>,
}

/// Validate classified staff contacts.
///
/// Requires a non-empty trimmed name and a syntactically valid email. Any
/// role below `super_admin` must resolve a station, from the record or
/// `cfg.default_station`, else the record is dropped. Records without a
/// password get a generated placeholder.
pub fn validate_contacts(contacts: Vec<StaffContact>, cfg: &IntakeConfig) -> Validated<StaffContact> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for mut contact in contacts {
        contact.name = contact.name.trim().to_string();
        if contact.name.is_empty() {
            skipped.push(format!("contact {}: empty name", contact.email));
            continue;
        }
        if !EMAIL.is_match(contact.email.trim()) {
            skipped.push(format!("contact {}: invalid email", contact.name));
            continue;
        }

        if contact.station_id.is_none() && contact.role != StaffRole::SuperAdmin {
            match &cfg.default_station {
                Some(station) => contact.station_id = Some(station.clone()),
                None => {
                    skipped.push(format!(
                        "contact {}: role {} requires a station and none was given",
                        contact.email,
                        contact.role.as_str()
                    ));
                    continue;
                }
            }
        }

        if contact.password.is_none() {
            contact.password = Some(cfg.password.generate());
        }

        records.push(contact);
    }

    warn_on_skips("contacts", &skipped);
    Validated { records, skipped }
}

/// Validate classified stations: non-empty name and location, within the
/// storage schema's length bounds.
pub fn validate_stations(stations: Vec<StationRecord>) -> Validated<StationRecord> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for station in stations {
        let name = station.name.trim();
        let location = station.location.trim();
        if name.is_empty() || location.is_empty() {
            skipped.push("station with empty name or location".to_string());
            continue;
        }
        if name.len() > MAX_STATION_NAME {
            let prefix: String = name.chars().take(24).collect();
            skipped.push(format!(
                "station name exceeds {MAX_STATION_NAME} chars: {prefix}..."
            ));
            continue;
        }
        if location.len() > MAX_STATION_LOCATION {
            skipped.push(format!(
                "station {name}: location exceeds {MAX_STATION_LOCATION} chars"
            ));
            continue;
        }
        records.push(StationRecord {
            name: name.to_string(),
            location: location.to_string(),
        });
    }

    warn_on_skips("stations", &skipped);
    Validated { records, skipped }
}

/// Validate classified voters: every field present and non-empty.
pub fn validate_voters(voters: Vec<VoterRecord>) -> Validated<VoterRecord> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for voter in voters {
        if voter.name.trim().is_empty() {
            skipped.push("voter with empty name".to_string());
            continue;
        }
        if voter.registration_number.trim().is_empty() {
            skipped.push(format!("voter {}: empty registration number", voter.name));
            continue;
        }
        if voter.station_id.trim().is_empty() {
            skipped.push(format!("voter {}: empty station id", voter.name));
            continue;
        }
        records.push(voter);
    }

    warn_on_skips("voters", &skipped);
    Validated { records, skipped }
}

fn warn_on_skips(kind: &str, skipped: &[String]) {
    if !skipped.is_empty() {
        tracing::warn!(kind, skipped = skipped.len(), "records dropped during validation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, role: StaffRole, station: Option<&str>) -> StaffContact {
        StaffContact {
            name: name.into(),
            email: email.into(),
            role,
            station_id: station.map(Into::into),
            password: None,
        }
    }

    // ── Contacts ─────────────────────────────────────────────────────

    #[test]
    fn valid_contact_kept_and_password_filled() {
        let out = validate_contacts(
            vec![contact("Jane", "jane@example.com", StaffRole::Worker, Some("STA001"))],
            &IntakeConfig::default(),
        );
        assert!(out.skipped.is_empty());
        assert_eq!(out.records.len(), 1);
        let password = out.records[0].password.as_ref().unwrap();
        assert_eq!(password.len(), 8);
    }

    #[test]
    fn existing_password_not_overwritten() {
        let mut c = contact("Jane", "jane@example.com", StaffRole::Worker, Some("STA001"));
        c.password = Some("already-set".into());
        let out = validate_contacts(vec![c], &IntakeConfig::default());
        assert_eq!(out.records[0].password.as_deref(), Some("already-set"));
    }

    #[test]
    fn worker_without_station_rejected() {
        let out = validate_contacts(
            vec![contact("Jane", "jane@example.com", StaffRole::Worker, None)],
            &IntakeConfig::default(),
        );
        assert!(out.records.is_empty());
        assert_eq!(out.skipped.len(), 1);
        assert!(out.skipped[0].contains("requires a station"));
    }

    #[test]
    fn worker_without_station_takes_default() {
        let cfg = IntakeConfig {
            default_station: Some("STA099".into()),
            ..IntakeConfig::default()
        };
        let out = validate_contacts(
            vec![contact("Jane", "jane@example.com", StaffRole::Worker, None)],
            &cfg,
        );
        assert_eq!(out.records[0].station_id.as_deref(), Some("STA099"));
    }

    #[test]
    fn super_admin_needs_no_station() {
        let out = validate_contacts(
            vec![contact("Efua", "efua@hq.org", StaffRole::SuperAdmin, None)],
            &IntakeConfig::default(),
        );
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].station_id, None);
    }

    #[test]
    fn empty_name_rejected() {
        let out = validate_contacts(
            vec![contact("   ", "jane@example.com", StaffRole::Worker, Some("STA001"))],
            &IntakeConfig::default(),
        );
        assert!(out.records.is_empty());
        assert!(out.skipped[0].contains("empty name"));
    }

    #[test]
    fn invalid_email_rejected() {
        let out = validate_contacts(
            vec![contact("Jane", "not-an-email", StaffRole::Worker, Some("STA001"))],
            &IntakeConfig::default(),
        );
        assert!(out.records.is_empty());
        assert!(out.skipped[0].contains("invalid email"));
    }

    #[test]
    fn one_bad_contact_does_not_sink_the_batch() {
        let out = validate_contacts(
            vec![
                contact("Jane", "jane@example.com", StaffRole::Worker, Some("STA001")),
                contact("Bad", "nope", StaffRole::Worker, Some("STA002")),
                contact("Kwame", "kwame@polls.org", StaffRole::Admin, Some("STA003")),
            ],
            &IntakeConfig::default(),
        );
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.skipped.len(), 1);
    }

    // ── Stations ─────────────────────────────────────────────────────

    #[test]
    fn valid_station_kept() {
        let out = validate_stations(vec![StationRecord {
            name: "Central Hall".into(),
            location: "123 Main St".into(),
        }]);
        assert_eq!(out.records.len(), 1);
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn blank_station_fields_rejected() {
        let out = validate_stations(vec![StationRecord {
            name: "  ".into(),
            location: "123 Main St".into(),
        }]);
        assert!(out.records.is_empty());
        assert_eq!(out.skipped.len(), 1);
    }

    #[test]
    fn oversized_station_name_rejected() {
        let out = validate_stations(vec![StationRecord {
            name: "N".repeat(256),
            location: "somewhere".into(),
        }]);
        assert!(out.records.is_empty());
        assert!(out.skipped[0].contains("255"));
    }

    #[test]
    fn oversized_location_rejected() {
        let out = validate_stations(vec![StationRecord {
            name: "Central Hall".into(),
            location: "L".repeat(501),
        }]);
        assert!(out.records.is_empty());
        assert!(out.skipped[0].contains("500"));
    }

    #[test]
    fn boundary_lengths_accepted() {
        let out = validate_stations(vec![StationRecord {
            name: "N".repeat(255),
            location: "L".repeat(500),
        }]);
        assert_eq!(out.records.len(), 1);
    }

    // ── Voters ───────────────────────────────────────────────────────

    #[test]
    fn complete_voter_kept() {
        let out = validate_voters(vec![VoterRecord {
            name: "Ama Mensah".into(),
            registration_number: "VR-2291".into(),
            station_id: "STA014".into(),
            has_voted: false,
        }]);
        assert_eq!(out.records.len(), 1);
    }

    #[test]
    fn voter_missing_fields_rejected() {
        let out = validate_voters(vec![
            VoterRecord {
                name: "".into(),
                registration_number: "VR-1".into(),
                station_id: "STA001".into(),
                has_voted: false,
            },
            VoterRecord {
                name: "Kofi".into(),
                registration_number: "  ".into(),
                station_id: "STA001".into(),
                has_voted: false,
            },
            VoterRecord {
                name: "Abena".into(),
                registration_number: "VR-2".into(),
                station_id: "".into(),
                has_voted: false,
            },
        ]);
        assert!(out.records.is_empty());
        assert_eq!(out.skipped.len(), 3);
    }
}
