use crate::models::VoterRecord;

/// Classify one line of extracted document text as a voter.
///
/// Expected layout: `Name, Registration Number, Station ID`. Extra
/// comma-separated fields are ignored. Lines with fewer than three fields
/// are silently skipped; field contents are checked by the validation
/// pass, not here. Voters always enter the roll as not-yet-voted.
pub fn classify_voter_line(line: &str) -> Option<VoterRecord> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }

    Some(VoterRecord {
        name: parts[0].to_string(),
        registration_number: parts[1].to_string(),
        station_id: parts[2].to_string(),
        has_voted: false,
    })
}
