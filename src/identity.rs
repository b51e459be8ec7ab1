//! Worker identity derivation.
//!
//! The boards carry no key stronger than the worker's name, so the default
//! identity is the trimmed, lowercased full name. Distinct workers with the
//! same name collide and silently merge — a documented limitation, not a
//! detected error. Every entry point that matches workers across snapshots
//! accepts an identity function so a stronger key (employee id, composite
//! name+birthdate) can replace the default without touching the differ.

use crate::types::WorkerId;

/// Default identity: trimmed, lowercased full name.
/// Returns an empty id for blank input; callers skip such rows.
pub fn normalized_name(raw: &str) -> WorkerId {
    raw.trim().to_lowercase()
}

/// Split a raw `Last, First` name into its parts.
/// Text without a comma lands entirely in the last name.
pub fn split_name(raw: &str) -> (String, String) {
    match raw.split_once(',') {
        Some((last, first)) => (last.trim().to_string(), first.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}
