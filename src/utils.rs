//! Text normalization helpers shared by the resolver and ingestion.

use crate::constants::cities::ZONE_PREFIX;
use crate::types::CityName;

/// Title-case a city name: first character uppercase, the rest lowercase.
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut cased: String = first.to_uppercase().collect();
            cased.extend(chars.flat_map(char::to_lowercase));
            cased
        }
        None => String::new(),
    }
}

/// Strip a leading `ZONA ` prefix (case-insensitive) from a zone name.
pub fn strip_zone_prefix(zone: &str) -> &str {
    let trimmed = zone.trim();
    match trimmed.get(..ZONE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(ZONE_PREFIX) => &trimmed[ZONE_PREFIX.len()..],
        _ => trimmed,
    }
}

/// Derive a displayable city name from a raw zone string.
/// Empty input yields an empty string; callers must tolerate it.
pub fn normalize_zone_name(zone: &str) -> CityName {
    title_case(strip_zone_prefix(zone).trim())
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}
