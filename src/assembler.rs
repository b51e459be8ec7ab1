//! Transfer assembly: diff output plus resolver and policy into records.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::constants::cities::NEW_ARRIVAL_ORIGIN;
use crate::data::{route_key, LocationTuple, Transfer, TransportMode, Worker};
use crate::differ::DiffResult;
use crate::policy::default_transport;
use crate::resolver::{resolve_city, ExceptionTable};
use crate::types::{CityName, RouteKey, WorkerId};

/// Operator-supplied per-route transport defaults, keyed by route key.
/// Consulted before the policy; insertion order is preserved for display.
pub type TransportOverrides = IndexMap<RouteKey, TransportMode>;

/// Build normalized transfer records from a diff result.
///
/// Pure: resolves cities, picks transports (override first, policy as
/// fallback), and populates one-time defaults (date/time unset, instructions
/// empty, leader false). Persistence and grouping are the caller's job.
pub fn assemble(
    diff: &DiffResult,
    exceptions: &ExceptionTable,
    overrides: &TransportOverrides,
) -> Vec<Transfer> {
    let mut transfers = Vec::with_capacity(diff.len());
    for moved in &diff.transferred {
        let origin_city = resolve_city(&moved.old_location, exceptions);
        transfers.push(build_transfer(
            moved.id.clone(),
            &moved.worker,
            origin_city,
            moved.old_location.clone(),
            exceptions,
            overrides,
            false,
        ));
    }
    for arrival in &diff.new_arrivals {
        // No prior position exists, so the origin degrades to the hub
        // placeholder with empty raw fields.
        transfers.push(build_transfer(
            arrival.id.clone(),
            &arrival.worker,
            NEW_ARRIVAL_ORIGIN.to_string(),
            LocationTuple::default(),
            exceptions,
            overrides,
            true,
        ));
    }
    transfers
}

/// Unique route keys the diff would produce, sorted ascending.
///
/// Feeds the operator's transport-override editor before [`assemble`] runs,
/// so every discovered route can carry an explicit default.
pub fn discover_routes(diff: &DiffResult, exceptions: &ExceptionTable) -> Vec<RouteKey> {
    let mut routes = BTreeSet::new();
    for moved in &diff.transferred {
        let origin = resolve_city(&moved.old_location, exceptions);
        let destination = resolve_city(&moved.worker.location, exceptions);
        routes.insert(route_key(&origin, &destination));
    }
    for arrival in &diff.new_arrivals {
        let destination = resolve_city(&arrival.worker.location, exceptions);
        routes.insert(route_key(NEW_ARRIVAL_ORIGIN, &destination));
    }
    routes.into_iter().collect()
}

fn build_transfer(
    id: WorkerId,
    worker: &Worker,
    origin_city: CityName,
    old_location: LocationTuple,
    exceptions: &ExceptionTable,
    overrides: &TransportOverrides,
    is_new: bool,
) -> Transfer {
    let destination_city = resolve_city(&worker.location, exceptions);
    let route = route_key(&origin_city, &destination_city);
    let transport = overrides
        .get(&route)
        .copied()
        .unwrap_or_else(|| default_transport(&origin_city, &destination_city));
    Transfer {
        id,
        name: worker.name.clone(),
        last_name: worker.last_name.clone(),
        first_name: worker.first_name.clone(),
        kind: worker.kind,
        companion: worker.companion.clone(),
        origin_city,
        origin_zone: old_location.zone,
        origin_district: old_location.district,
        origin_area: old_location.area,
        destination_city,
        destination_zone: worker.location.zone.clone(),
        destination_district: worker.location.district.clone(),
        destination_area: worker.location.area.clone(),
        transport,
        date: None,
        time: None,
        instructions: String::new(),
        leader: false,
        is_new,
    }
}
