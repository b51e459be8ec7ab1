//! Raw roster-row boundary and the end-to-end processing pipeline.
//!
//! Spreadsheet parsing is external: the embedding application hands over
//! ordered header → cell maps plus the operator's column mapping, and this
//! module turns them into workers and, via differ and assembler, into the
//! transfer collection. The two boards are read concurrently upstream; the
//! pipeline here is synchronous and only runs once both row sets exist.

use tracing::debug;

use crate::assembler::assemble;
use crate::data::{LocationTuple, Worker, WorkerKind};
use crate::differ::diff;
use crate::errors::BoardError;
use crate::identity::{normalized_name, split_name};
use crate::state::AppState;
use crate::types::{RawHeader, WorkerId};
use crate::utils::normalize_inline_whitespace;

/// One spreadsheet row keyed by column header, insertion-ordered.
pub type RosterRow = indexmap::IndexMap<RawHeader, String>;

/// Operator-chosen binding of logical fields to spreadsheet headers.
///
/// The schema is not fixed; the operator maps columns before processing.
/// Only `name` is required — everything else degrades to empty fields.
#[derive(Clone, Debug, Default)]
pub struct ColumnMapping {
    /// Header carrying the worker's `Last, First` name (required).
    pub name: Option<String>,
    /// Header carrying the worker type (Elder/Sister).
    pub kind: Option<String>,
    /// Header carrying the zone.
    pub zone: Option<String>,
    /// Header carrying the district.
    pub district: Option<String>,
    /// Header carrying the area.
    pub area: Option<String>,
    /// Header carrying the companion name.
    pub companion: Option<String>,
}

fn cell(row: &RosterRow, header: Option<&str>) -> String {
    header
        .and_then(|h| row.get(h))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Turn raw rows into workers using the operator's column mapping.
///
/// Rows with a blank name are skipped, not fatal. An unbound `name` column
/// is the one hard error: without it no identity can be derived.
pub fn parse_roster(rows: &[RosterRow], mapping: &ColumnMapping) -> Result<Vec<Worker>, BoardError> {
    let name_header = mapping
        .name
        .as_deref()
        .ok_or(BoardError::MissingColumn { field: "name" })?;

    let mut workers = Vec::with_capacity(rows.len());
    for row in rows {
        let name = normalize_inline_whitespace(cell(row, Some(name_header)));
        if name.is_empty() {
            debug!("skipping roster row with empty name cell");
            continue;
        }
        let (last_name, first_name) = split_name(&name);
        workers.push(Worker {
            last_name,
            first_name,
            kind: WorkerKind::parse(&cell(row, mapping.kind.as_deref())),
            companion: cell(row, mapping.companion.as_deref()),
            location: LocationTuple {
                zone: cell(row, mapping.zone.as_deref()),
                district: cell(row, mapping.district.as_deref()),
                area: cell(row, mapping.area.as_deref()),
            },
            name,
        });
    }
    Ok(workers)
}

/// Run the full pipeline with the default name-based identity.
///
/// Parses both boards, diffs them, assembles transfers against the state's
/// exception table and transport overrides, and replaces the transfer
/// collection. Returns the number of transfers produced. Any error surfaces
/// before existing state is touched.
pub fn process_boards(
    old_rows: &[RosterRow],
    new_rows: &[RosterRow],
    mapping: &ColumnMapping,
    state: &mut AppState,
) -> Result<usize, BoardError> {
    process_boards_with(old_rows, new_rows, mapping, normalized_name, state)
}

/// [`process_boards`] with an injected identity function.
pub fn process_boards_with<F>(
    old_rows: &[RosterRow],
    new_rows: &[RosterRow],
    mapping: &ColumnMapping,
    identity: F,
    state: &mut AppState,
) -> Result<usize, BoardError>
where
    F: Fn(&str) -> WorkerId,
{
    let old_board = parse_roster(old_rows, mapping)?;
    let new_board = parse_roster(new_rows, mapping)?;
    if old_board.is_empty() || new_board.is_empty() {
        return Err(BoardError::EmptyBoard);
    }
    let changes = diff(&old_board, &new_board, identity);
    let transfers = assemble(&changes, &state.exceptions, &state.transport_overrides);
    let produced = transfers.len();
    state.replace_transfers(transfers);
    Ok(produced)
}
