//! Document-level intake: sanitize extracted text, classify it line by
//! line, run the validation pass, and summarize what was kept and what was
//! dropped. One unrecognizable line never aborts an import; an import
//! where nothing survives is an error, so the upload endpoint can tell the
//! operator the file format is wrong rather than silently storing nothing.

use serde::Serialize;
use thiserror::Error;

use crate::classify::{classify_contact_line_with, classify_station_line, classify_voter_line};
use crate::config::IntakeConfig;
use crate::models::{StaffContact, StationRecord, VoterRecord};
use crate::sanitize::{sanitize_text, truncate_line};
use crate::validate::{validate_contacts, validate_stations, validate_voters};

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("no usable records found in document text")]
    NoRecords,
}

/// Summary of one free-text import.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeSummary<T> {
    /// Records that survived classification and validation, in input order.
    pub records: Vec<T>,
    /// One human-readable reason per dropped line or record.
    pub skipped: Vec<String>,
}

impl<T> IntakeSummary<T> {
    pub fn imported(&self) -> usize {
        self.records.len()
    }
}

/// Import staff contacts from extracted document text.
pub fn intake_contacts(
    text: &str,
    cfg: &IntakeConfig,
) -> Result<IntakeSummary<StaffContact>, IntakeError> {
    let (classified, mut skipped) = classify_lines(text, cfg, "contact", |line| {
        classify_contact_line_with(line, cfg.default_role.clone())
    });
    let validated = validate_contacts(classified, cfg);
    skipped.extend(validated.skipped);
    summarize("contacts", validated.records, skipped)
}

/// Import voting stations from extracted document text.
pub fn intake_stations(
    text: &str,
    cfg: &IntakeConfig,
) -> Result<IntakeSummary<StationRecord>, IntakeError> {
    let (classified, mut skipped) = classify_lines(text, cfg, "station", classify_station_line);
    let validated = validate_stations(classified);
    skipped.extend(validated.skipped);
    summarize("stations", validated.records, skipped)
}

/// Import voters from extracted document text.
pub fn intake_voters(
    text: &str,
    cfg: &IntakeConfig,
) -> Result<IntakeSummary<VoterRecord>, IntakeError> {
    let (classified, mut skipped) = classify_lines(text, cfg, "voter", classify_voter_line);
    let validated = validate_voters(classified);
    skipped.extend(validated.skipped);
    summarize("voters", validated.records, skipped)
}

/// Sanitize, bound, and classify every line, recording a line-numbered
/// skip reason for each line the classifier rejects.
fn classify_lines<T>(
    text: &str,
    cfg: &IntakeConfig,
    kind: &str,
    classify: impl Fn(&str) -> Option<T>,
) -> (Vec<T>, Vec<String>) {
    let clean = sanitize_text(text);
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in clean.lines().enumerate() {
        let line = truncate_line(line, cfg.max_line_len);
        match classify(line) {
            Some(record) => records.push(record),
            None => skipped.push(format!("line {}: unrecognized {kind} line", idx + 1)),
        }
    }

    (records, skipped)
}

fn summarize<T>(
    kind: &str,
    records: Vec<T>,
    skipped: Vec<String>,
) -> Result<IntakeSummary<T>, IntakeError> {
    if records.is_empty() {
        return Err(IntakeError::NoRecords);
    }
    tracing::info!(
        kind,
        imported = records.len(),
        skipped = skipped.len(),
        "free-text import complete"
    );
    Ok(IntakeSummary { records, skipped })
}
