/// Stable worker identifier derived from the injected identity function.
/// Default derivation is the trimmed, lowercased full name.
/// Example: `silva, joão`
pub type WorkerId = String;
/// Canonical city name produced by the city resolver.
/// Examples: `Beira`, `Tete`, `Nhamatanda`
pub type CityName = String;
/// Key identifying one partition of the transfer collection.
/// Examples: `Tete -> Beira`, `Txopela/Taxi`, `master`
pub type GroupKey = String;
/// City-pair key used for transport overrides and city-pair grouping.
/// Example: `Tete -> Beira`
pub type RouteKey = String;
/// Raw spreadsheet column header as produced by the external parser.
/// Examples: `Missionary Name`, `Zona`, `Área`
pub type RawHeader = String;
/// Exception-table match key (raw area/district/zone text, exact match).
/// Examples: `Nhamatanda`, `Quelimane District`, `ZONA INHAMIZUA`
pub type MatchKey = String;
