//! Free-text intake for an election-monitoring backend.
//!
//! Everything here is pure computation over strings: SMS incident bodies
//! are classified into typed reports, and lines of extracted document text
//! (PDF/Word) become station, staff, or voter records. Persistence, auth,
//! HTTP, and SMS transport live in the surrounding service; this crate
//! only decides what a piece of text means.

pub mod classify;
pub mod config;
pub mod intake;
pub mod models;
pub mod sanitize;
pub mod validate;

pub use classify::{classify_contact_line, classify_report, classify_station_line, classify_voter_line};
pub use config::IntakeConfig;
pub use intake::{intake_contacts, intake_stations, intake_voters, IntakeError, IntakeSummary};
