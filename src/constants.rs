/// Constants used by city resolution and the transport policy.
pub mod cities {
    /// Major transport hubs for default-transport rules.
    pub const HUB_CITIES: [&str; 3] = ["Tete", "Chimoio", "Beira"];
    /// Coastal hub where a same-city move defaults to a ride share.
    pub const COASTAL_HUB: &str = "Beira";
    /// Remote city reachable only by air from the hub cities.
    pub const AIR_ONLY_CITY: &str = "Nampula";
    /// City pair connected by a long-haul bus route despite the distance.
    pub const LONG_HAUL_PAIR: (&str, &str) = ("Quelimane", "Nampula");
    /// Built-in zone names that all map to the coastal hub.
    pub const HUB_ZONES: [&str; 3] = ["ZONA MUNHAVA", "ZONA INHAMIZUA", "ZONA MANGA"];
    /// City the built-in hub zones resolve to.
    pub const HUB_ZONE_CITY: &str = "Beira";
    /// Prefix stripped from zone names before title-casing the remainder.
    pub const ZONE_PREFIX: &str = "ZONA ";
    /// Placeholder origin city for workers with no prior snapshot entry.
    pub const NEW_ARRIVAL_ORIGIN: &str = "Beira";
}

/// Constants used by grouping and route keys.
pub mod groups {
    /// Separator between origin and destination in route/group keys.
    pub const ROUTE_SEPARATOR: &str = " -> ";
    /// Group key for the ungrouped master view.
    pub const MASTER_GROUP_KEY: &str = "master";
}

/// Constants used by state persistence.
pub mod state {
    /// Well-known key the serialized application state is stored under.
    pub const STATE_KEY: &str = "transfer_logistics_data_v6";
    /// Default directory for the file-backed state store.
    pub const DEFAULT_STORE_DIR: &str = ".transfer_store";
    /// Log message used when a persisted blob cannot be decoded.
    pub const CORRUPT_BLOB_MSG: &str = "persisted state blob unreadable, starting from defaults";
}

/// Constants used by per-view column layouts.
pub mod columns {
    /// Default visible columns for the city-pair view.
    pub const DEFAULT_CITY_COLUMNS: [&str; 10] = [
        "type",
        "lastName",
        "originArea",
        "destArea",
        "transport",
        "date",
        "time",
        "instructions",
        "new",
        "leader",
    ];
    /// Default visible columns for the transport and master views.
    pub const DEFAULT_WIDE_COLUMNS: [&str; 10] = [
        "type",
        "lastName",
        "originCity",
        "destCity",
        "transport",
        "date",
        "time",
        "instructions",
        "new",
        "leader",
    ];
}

/// Constants used by the delimited export/restore format.
pub mod export {
    /// Field delimiter for exported rows.
    pub const DELIMITER: char = ';';
    /// Header row emitted before exported transfers.
    pub const HEADER: &str = "Last Name;First Name;Type;Origin;Destination;Origin Area;Destination Area;Companion;Transport;Date;Time;Instructions;New;Leader";
    /// Number of fields per exported row.
    pub const FIELD_COUNT: usize = 14;
    /// Marker for set boolean fields (new/leader).
    pub const FLAG_YES: &str = "yes";
    /// Marker for unset boolean fields (new/leader).
    pub const FLAG_NO: &str = "no";
    /// Date encoding for exported rows.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    /// Time encoding for exported rows.
    pub const TIME_FORMAT: &str = "%H:%M";
}
