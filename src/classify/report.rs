//! Incident report classification for inbound SMS bodies.
//!
//! Field monitors text short free-form messages ("station 12 machine
//! broken, long queue outside"). This module maps one message to a typed
//! report using ordered heuristic rules: an ordered list of station-id
//! patterns (first pattern to match anywhere wins) and an ordered keyword
//! table (first table entry found as a substring wins). Classification is
//! pure and never fails — unmatched input degrades to the default type
//! with no station.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{IncidentReport, ReportType};
use crate::sanitize::truncate_line;

/// Hard bound on message length before matching. SMS bodies are far
/// shorter; the bound only matters for abusive web-form input.
const MAX_MESSAGE_LEN: usize = 2048;

/// Ordered station-id extraction patterns. The list is tried in order and
/// the first pattern with a match anywhere in the message wins — not the
/// best match, not the earliest occurrence in the text.
///
/// The last two patterns can select a number unrelated to the station,
/// e.g. a phone number ending the message. That matches live traffic as
/// operators have learned to write it; see DESIGN.md before reordering.
static STATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"station\s+(\d+)",
        r"st\s+(\d+)",
        r"stn\s+(\d+)",
        r"^(\d+)",
        r"(\d+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// One classification rule: a keyword looked up as a substring of the
/// normalized message, and the type it maps to.
#[derive(Debug, Clone)]
pub struct ReportRule {
    pub keyword: &'static str,
    pub report_type: ReportType,
}

/// Built-in rule table, evaluated in order. Table order is the tie-break:
/// a message containing both "broken" and "queue" is an equipment failure
/// because equipment keywords sit higher in the table.
pub const DEFAULT_REPORT_RULES: &[ReportRule] = &[
    ReportRule { keyword: "equipment", report_type: ReportType::EquipmentFailure },
    ReportRule { keyword: "broken", report_type: ReportType::EquipmentFailure },
    ReportRule { keyword: "malfunction", report_type: ReportType::EquipmentFailure },
    ReportRule { keyword: "machine", report_type: ReportType::EquipmentFailure },
    ReportRule { keyword: "queue", report_type: ReportType::QueueIssue },
    ReportRule { keyword: "line", report_type: ReportType::QueueIssue },
    ReportRule { keyword: "waiting", report_type: ReportType::QueueIssue },
    ReportRule { keyword: "crowd", report_type: ReportType::QueueIssue },
    ReportRule { keyword: "security", report_type: ReportType::SecurityConcern },
    ReportRule { keyword: "fight", report_type: ReportType::SecurityConcern },
    ReportRule { keyword: "violence", report_type: ReportType::SecurityConcern },
    ReportRule { keyword: "threat", report_type: ReportType::SecurityConcern },
    ReportRule { keyword: "access", report_type: ReportType::AccessibilityIssue },
    ReportRule { keyword: "disabled", report_type: ReportType::AccessibilityIssue },
    ReportRule { keyword: "wheelchair", report_type: ReportType::AccessibilityIssue },
    ReportRule { keyword: "ramp", report_type: ReportType::AccessibilityIssue },
    ReportRule { keyword: "incident", report_type: ReportType::Incident },
    ReportRule { keyword: "problem", report_type: ReportType::Incident },
    ReportRule { keyword: "issue", report_type: ReportType::Incident },
    ReportRule { keyword: "help", report_type: ReportType::Other },
    ReportRule { keyword: "other", report_type: ReportType::Other },
];

/// Classify one SMS body using the built-in rule table.
pub fn classify_report(message: &str) -> IncidentReport {
    classify_report_with(message, DEFAULT_REPORT_RULES)
}

/// Classify one SMS body against a caller-supplied rule table.
pub fn classify_report_with(message: &str, rules: &[ReportRule]) -> IncidentReport {
    let lowered = message.to_lowercase();
    let msg = truncate_line(lowered.trim(), MAX_MESSAGE_LEN);

    let station_id = STATION_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(msg))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let report_type = rules
        .iter()
        .find(|rule| msg.contains(rule.keyword))
        .map(|rule| rule.report_type.clone())
        .unwrap_or(ReportType::Incident);

    tracing::debug!(
        station = ?station_id,
        report_type = %report_type.as_str(),
        "sms report classified"
    );

    IncidentReport {
        report_type,
        station_id,
    }
}
