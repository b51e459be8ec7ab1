use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::groups::ROUTE_SEPARATOR;
use crate::types::{CityName, RouteKey, WorkerId};

/// Raw organizational-unit fields for one worker at one point in time.
///
/// Free text, case-inconsistent, any field may be empty. Comparison is
/// field-by-field; a change in any of the three fields marks a real move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTuple {
    /// Zone assignment, e.g. `ZONA BEIRA`.
    pub zone: String,
    /// District assignment within the zone.
    pub district: String,
    /// Area assignment within the district.
    pub area: String,
}

/// Worker classification parsed from the roster's type column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerKind {
    /// Elder.
    Elder,
    /// Sister.
    Sister,
    /// Type column unmapped, empty, or unrecognized.
    #[default]
    Unknown,
}

impl WorkerKind {
    /// Parse a raw type cell; anything but an exact `Elder`/`Sister`
    /// (case-insensitive) stays `Unknown`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("elder") {
            WorkerKind::Elder
        } else if trimmed.eq_ignore_ascii_case("sister") {
            WorkerKind::Sister
        } else {
            WorkerKind::Unknown
        }
    }

    /// Display label; `Unknown` renders empty so exports stay editable.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerKind::Elder => "Elder",
            WorkerKind::Sister => "Sister",
            WorkerKind::Unknown => "",
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One roster entry: a worker and their current organizational position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Worker {
    /// Raw full name as it appears on the board (`Last, First`).
    pub name: String,
    /// Parsed last name (text before the first comma).
    pub last_name: String,
    /// Parsed first name (text after the first comma).
    pub first_name: String,
    /// Worker classification.
    pub kind: WorkerKind,
    /// Companion free text, when the board carries one.
    pub companion: String,
    /// Current organizational position.
    pub location: LocationTuple,
}

/// Transport mode for a transfer.
///
/// Defaults come from the transport policy and are heuristics the operator
/// is expected to override case-by-case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    /// Intercity bus (also the fallback mode).
    Bus,
    /// Airplane, for routes with no practical ground connection.
    Plane,
    /// Chapa (shared minibus).
    Chapa,
    /// Local ground transport for same-city moves.
    #[serde(rename = "Txopela/Taxi")]
    Taxi,
    /// Ride share / boleia.
    Ride,
}

impl TransportMode {
    /// All modes, in dropdown order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Bus,
        TransportMode::Plane,
        TransportMode::Chapa,
        TransportMode::Taxi,
        TransportMode::Ride,
    ];

    /// Canonical label (also the serde encoding).
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Bus",
            TransportMode::Plane => "Plane",
            TransportMode::Chapa => "Chapa",
            TransportMode::Taxi => "Txopela/Taxi",
            TransportMode::Ride => "Ride",
        }
    }

    /// Parse a canonical or localized label back into a mode.
    /// Restored exports may carry Portuguese labels.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Bus" | "Autocarro" => Some(TransportMode::Bus),
            "Plane" | "Airplane" | "Avião" | "Aviao" => Some(TransportMode::Plane),
            "Chapa" => Some(TransportMode::Chapa),
            "Txopela/Taxi" | "Txopela/Táxi" | "Taxi" | "Táxi" => Some(TransportMode::Taxi),
            "Ride" | "Boleia" => Some(TransportMode::Ride),
            _ => None,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A worker whose assignment changed between the two boards, enriched with
/// logistics fields. The unit the rest of the crate operates on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transfer {
    /// Identity derived from the worker's name; re-derived when the name is
    /// edited. Two workers normalizing to the same id silently merge.
    pub id: WorkerId,
    /// Raw full name (`Last, First`).
    pub name: String,
    /// Parsed last name.
    pub last_name: String,
    /// Parsed first name.
    pub first_name: String,
    /// Worker classification.
    pub kind: WorkerKind,
    /// Companion free text.
    pub companion: String,
    /// Canonical origin city (empty when unresolvable).
    pub origin_city: CityName,
    /// Raw origin zone, retained for display/export.
    pub origin_zone: String,
    /// Raw origin district.
    pub origin_district: String,
    /// Raw origin area.
    pub origin_area: String,
    /// Canonical destination city (empty when unresolvable).
    pub destination_city: CityName,
    /// Raw destination zone.
    pub destination_zone: String,
    /// Raw destination district.
    pub destination_district: String,
    /// Raw destination area.
    pub destination_area: String,
    /// Transport mode, defaulted by the policy, operator-editable.
    pub transport: TransportMode,
    /// Travel date; unset together with `time` means "to be determined".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Departure time; unset together with `date` means "to be determined".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Operator instructions, free text.
    pub instructions: String,
    /// Marks the travel-group leader.
    pub leader: bool,
    /// True when the worker has no prior snapshot entry.
    pub is_new: bool,
}

impl Transfer {
    /// City-pair key this transfer belongs to, always computed from the
    /// current origin/destination so edits can never leave it stale.
    pub fn route_key(&self) -> RouteKey {
        format!(
            "{}{}{}",
            self.origin_city, ROUTE_SEPARATOR, self.destination_city
        )
    }

    /// True when the travel date/time is still to be determined.
    pub fn is_tbd(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }
}

/// Build a route key from an origin/destination pair.
pub fn route_key(origin: &str, destination: &str) -> RouteKey {
    format!("{origin}{ROUTE_SEPARATOR}{destination}")
}
