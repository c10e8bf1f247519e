use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{StaffContact, StaffRole};

/// Composite contact-line pattern:
/// `<name> <sep> <email> [<sep> <role>] [<sep> <station>]` with `-` or `,`
/// as separator. Role text is letters/underscores only; the station code
/// shape is three letters followed by three digits (e.g. "STA001").
static CONTACT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*([^,\-]+?)\s*[-,]\s*([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})\s*(?:[-,]\s*([A-Za-z_][A-Za-z_ ]*?)\s*)?(?:[-,]\s*([A-Za-z]{3}[0-9]{3})\s*)?$",
    )
    .unwrap()
});

/// Classify one line of extracted document text as a staff contact.
///
/// Returns `None` when name or email cannot be extracted — the line is
/// silently skipped, not an error. A role outside the recognized set
/// coerces to `worker`. The password is left unset; the validation pass
/// fills it.
pub fn classify_contact_line(line: &str) -> Option<StaffContact> {
    classify_contact_line_with(line, StaffRole::Worker)
}

/// Same as [`classify_contact_line`] with a caller-supplied default role.
pub fn classify_contact_line_with(line: &str, default_role: StaffRole) -> Option<StaffContact> {
    let caps = CONTACT_LINE.captures(line)?;

    let name = caps.get(1)?.as_str().trim().to_string();
    let email = caps.get(2)?.as_str().trim().to_string();
    if name.is_empty() {
        return None;
    }

    let role = caps
        .get(3)
        .and_then(|m| StaffRole::from_str(&m.as_str().trim().to_lowercase()).ok())
        .unwrap_or(default_role);

    let station_id = caps.get(4).map(|m| m.as_str().to_string());

    Some(StaffContact {
        name,
        email,
        role,
        station_id,
        password: None,
    })
}
