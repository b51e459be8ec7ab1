#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Transfer assembly and route discovery.
pub mod assembler;
/// Crate-wide constants (cities, group keys, persistence, export format).
pub mod constants;
/// Serde data model: locations, workers, transfers, transport modes.
pub mod data;
/// Roster snapshot comparison.
pub mod differ;
/// Delimited export and restore of the transfer list.
pub mod export;
/// Group index over the canonical transfer collection.
pub mod groups;
/// Worker identity derivation (pluggable, name-based by default).
pub mod identity;
/// Raw roster-row boundary and the processing pipeline.
pub mod ingestion;
/// Default transport policy per city pair.
pub mod policy;
/// City resolution via exception table and matcher strategies.
pub mod resolver;
/// Application-state container and mutation entry points.
pub mod state;
/// State persistence backends.
pub mod store;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers.
pub mod utils;

mod errors;

pub use assembler::{assemble, discover_routes, TransportOverrides};
pub use data::{route_key, LocationTuple, Transfer, TransportMode, Worker, WorkerKind};
pub use differ::{diff, DiffResult, NewArrival, TransferredWorker};
pub use errors::BoardError;
pub use export::{export_delimited, restore_delimited};
pub use groups::{regroup, GroupBy};
pub use ingestion::{parse_roster, process_boards, process_boards_with, ColumnMapping, RosterRow};
pub use policy::default_transport;
pub use resolver::{default_exceptions, resolve_city, ExceptionTable};
pub use state::{AppState, ColumnSettings, Language, ViewKind};
pub use store::{load_or_default, FileStateStore, MemoryStateStore, StateStore};
pub use types::{CityName, GroupKey, MatchKey, RouteKey, WorkerId};
