//! Default transport assignment per city pair.

use crate::constants::cities::{AIR_ONLY_CITY, COASTAL_HUB, HUB_CITIES, LONG_HAUL_PAIR};
use crate::data::TransportMode;

fn is_hub(city: &str) -> bool {
    HUB_CITIES.iter().any(|hub| hub.eq_ignore_ascii_case(city))
}

/// Pick a default transport mode for an origin/destination pair.
///
/// Total function, first rule wins, city comparison case-insensitive:
/// 1. same city, coastal hub → `Ride`;
/// 2. same city, anywhere else → `Txopela/Taxi`;
/// 3. two distinct hub cities → `Bus`;
/// 4. the Quelimane/Nampula long-haul pair (either direction) → `Bus`;
/// 5. exactly one endpoint is the air-only city → `Plane`;
/// 6. everything else → `Bus`.
///
/// These are heuristics the operator overrides case-by-case; precision is
/// not required, just a sane starting point.
pub fn default_transport(origin: &str, destination: &str) -> TransportMode {
    let from = origin.trim();
    let to = destination.trim();

    if from.eq_ignore_ascii_case(to) {
        return if from.eq_ignore_ascii_case(COASTAL_HUB) {
            TransportMode::Ride
        } else {
            TransportMode::Taxi
        };
    }
    if is_hub(from) && is_hub(to) {
        return TransportMode::Bus;
    }
    let (a, b) = LONG_HAUL_PAIR;
    if (from.eq_ignore_ascii_case(a) && to.eq_ignore_ascii_case(b))
        || (from.eq_ignore_ascii_case(b) && to.eq_ignore_ascii_case(a))
    {
        return TransportMode::Bus;
    }
    if from.eq_ignore_ascii_case(AIR_ONLY_CITY) || to.eq_ignore_ascii_case(AIR_ONLY_CITY) {
        return TransportMode::Plane;
    }
    TransportMode::Bus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_city_defaults() {
        assert_eq!(default_transport("Beira", "Beira"), TransportMode::Ride);
        assert_eq!(default_transport("Tete", "Tete"), TransportMode::Taxi);
        assert_eq!(default_transport("Caia", "Caia"), TransportMode::Taxi);
        // Same-city beats the air-only rule.
        assert_eq!(default_transport("Nampula", "Nampula"), TransportMode::Taxi);
    }

    #[test]
    fn hub_to_hub_goes_by_bus() {
        assert_eq!(default_transport("Tete", "Beira"), TransportMode::Bus);
        assert_eq!(default_transport("Chimoio", "Tete"), TransportMode::Bus);
    }

    #[test]
    fn long_haul_pair_goes_by_bus_both_ways() {
        assert_eq!(default_transport("Quelimane", "Nampula"), TransportMode::Bus);
        assert_eq!(default_transport("Nampula", "Quelimane"), TransportMode::Bus);
    }

    #[test]
    fn air_only_city_forces_plane() {
        assert_eq!(default_transport("Beira", "Nampula"), TransportMode::Plane);
        assert_eq!(default_transport("Nampula", "Tete"), TransportMode::Plane);
    }

    #[test]
    fn comparison_ignores_case() {
        assert_eq!(default_transport("beira", "BEIRA"), TransportMode::Ride);
        assert_eq!(default_transport("TETE", "beira"), TransportMode::Bus);
    }

    #[test]
    fn fallback_is_bus() {
        assert_eq!(default_transport("Caia", "Marromeu"), TransportMode::Bus);
        assert_eq!(default_transport("", "Beira"), TransportMode::Bus);
    }
}
