//! City resolution: raw zone/district/area text to a canonical city name.
//!
//! Resolution is an ordered list of pure matcher strategies tried in fixed
//! order; the first hit wins and the final normalizer always produces a
//! value, so resolution never fails — it only returns a possibly-empty,
//! possibly-wrong string, reflecting an inherently fuzzy real-world mapping.

use indexmap::IndexMap;

use crate::constants::cities::{HUB_ZONE_CITY, HUB_ZONES};
use crate::data::LocationTuple;
use crate::types::{CityName, MatchKey};
use crate::utils::normalize_zone_name;

/// Operator-maintained override list for organizational units whose
/// canonical city cannot be derived from the zone name.
///
/// Keys match raw area/district/zone text exactly (case-sensitive) — a known
/// fragility kept for compatibility with existing operator tables. Insertion
/// order is preserved for display; precedence between the three fields is
/// fixed by the matcher order, not by table order.
pub type ExceptionTable = IndexMap<MatchKey, CityName>;

/// Exception rules every fresh state starts with.
pub fn default_exceptions() -> ExceptionTable {
    IndexMap::from([
        ("Quelimane".to_string(), "Quelimane".to_string()),
        ("Quelimane District".to_string(), "Quelimane".to_string()),
        ("Nhamatanda".to_string(), "Nhamatanda".to_string()),
        ("Marromeu".to_string(), "Marromeu".to_string()),
        ("Caia".to_string(), "Caia".to_string()),
    ])
}

/// One resolution strategy: a pure function that either claims the location
/// or passes it to the next matcher.
type Matcher = fn(&LocationTuple, &ExceptionTable) -> Option<CityName>;

/// Fixed matcher order: area exception, district exception, zone exception,
/// built-in hub-zone list. The default normalizer runs when all decline.
const MATCHERS: [Matcher; 4] = [
    match_area_exception,
    match_district_exception,
    match_zone_exception,
    match_hub_zone,
];

/// Look up one raw field in the table. Empty fields never match, even when
/// an empty-string rule exists.
fn exception_for(exceptions: &ExceptionTable, field: &str) -> Option<CityName> {
    if field.is_empty() {
        return None;
    }
    exceptions.get(field).cloned()
}

fn match_area_exception(location: &LocationTuple, exceptions: &ExceptionTable) -> Option<CityName> {
    exception_for(exceptions, &location.area)
}

fn match_district_exception(
    location: &LocationTuple,
    exceptions: &ExceptionTable,
) -> Option<CityName> {
    exception_for(exceptions, &location.district)
}

fn match_zone_exception(location: &LocationTuple, exceptions: &ExceptionTable) -> Option<CityName> {
    exception_for(exceptions, &location.zone)
}

fn match_hub_zone(location: &LocationTuple, _exceptions: &ExceptionTable) -> Option<CityName> {
    let zone = location.zone.trim();
    HUB_ZONES
        .iter()
        .any(|hub| hub.eq_ignore_ascii_case(zone))
        .then(|| HUB_ZONE_CITY.to_string())
}

/// Resolve a raw location to a canonical city name.
///
/// Total and deterministic: the same location and table always produce the
/// same output. An empty zone with no exception match yields an empty
/// string, which callers must tolerate.
pub fn resolve_city(location: &LocationTuple, exceptions: &ExceptionTable) -> CityName {
    for matcher in MATCHERS {
        if let Some(city) = matcher(location, exceptions) {
            return city;
        }
    }
    normalize_zone_name(&location.zone)
}
