use std::sync::LazyLock;

use regex::Regex;

use crate::models::StationRecord;

/// Primary station-line pattern: `<name> <sep> <location>` with `-` or `,`
/// as separator.
static STATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*[-,]\s*(.+)$").unwrap());

/// Classify one line of extracted document text as a voting station.
///
/// Falls back to a keyword split for lines that mention a station without
/// the usual separator ("Polling Place 4; Riverside"). Returns `None`
/// when neither pattern applies — the line is silently skipped.
pub fn classify_station_line(line: &str) -> Option<StationRecord> {
    let line = line.trim();

    if let Some(caps) = STATION_LINE.captures(line) {
        let name = caps.get(1)?.as_str().trim();
        let location = caps.get(2)?.as_str().trim();
        if !name.is_empty() && !location.is_empty() {
            return Some(StationRecord {
                name: name.to_string(),
                location: location.to_string(),
            });
        }
    }

    // Keyword fallback for `;`/`|` separated lines.
    let lower = line.to_lowercase();
    if lower.contains("station") || lower.contains("polling") {
        let parts: Vec<&str> = line.split([',', ';', '|']).collect();
        if parts.len() >= 2 {
            let name = parts[0].trim();
            let location = parts[1].trim();
            if !name.is_empty() && !location.is_empty() {
                return Some(StationRecord {
                    name: name.to_string(),
                    location: location.to_string(),
                });
            }
        }
    }

    None
}
