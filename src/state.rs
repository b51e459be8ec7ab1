//! Explicit application-state container and its mutation entry points.
//!
//! One instance holds everything the operator works on; it is passed by
//! reference to each component instead of living in ambient globals, and has
//! an explicit lifecycle: initialize from a persisted snapshot or defaults,
//! mutate through the methods here, serialize on demand. Single logical
//! writer, no internal locking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assembler::TransportOverrides;
use crate::constants::columns::{DEFAULT_CITY_COLUMNS, DEFAULT_WIDE_COLUMNS};
use crate::data::{Transfer, TransportMode};
use crate::groups::{regroup, GroupBy};
use crate::identity::{normalized_name, split_name};
use crate::resolver::{default_exceptions, ExceptionTable};
use crate::types::{CityName, GroupKey, MatchKey, RouteKey, WorkerId};

/// Operator-facing display language. The string tables themselves live in
/// the embedding application; only the choice is persisted here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[serde(rename = "en")]
    En,
    /// Portuguese (default).
    #[default]
    #[serde(rename = "pt")]
    Pt,
}

/// Group views the renderer offers, each with its own column layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// Grouped by city pair.
    City,
    /// Grouped by transport mode.
    Transport,
    /// Ungrouped master list.
    Master,
}

/// Ordered visible-column keys per view, persisted with the state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnSettings {
    /// Columns for the city-pair view.
    pub city: Vec<String>,
    /// Columns for the transport view.
    pub transport: Vec<String>,
    /// Columns for the master view.
    pub master: Vec<String>,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        let wide = || DEFAULT_WIDE_COLUMNS.map(str::to_string).to_vec();
        Self {
            city: DEFAULT_CITY_COLUMNS.map(str::to_string).to_vec(),
            transport: wide(),
            master: wide(),
        }
    }
}

impl ColumnSettings {
    /// Current column order for one view.
    pub fn view(&self, view: ViewKind) -> &[String] {
        match view {
            ViewKind::City => &self.city,
            ViewKind::Transport => &self.transport,
            ViewKind::Master => &self.master,
        }
    }

    /// Replace the column order for one view.
    pub fn set_view(&mut self, view: ViewKind, columns: Vec<String>) {
        match view {
            ViewKind::City => self.city = columns,
            ViewKind::Transport => self.transport = columns,
            ViewKind::Master => self.master = columns,
        }
    }

    /// Restore one view to its default layout.
    pub fn reset_view(&mut self, view: ViewKind) {
        let defaults = ColumnSettings::default();
        let columns = match view {
            ViewKind::City => defaults.city,
            ViewKind::Transport => defaults.transport,
            ViewKind::Master => defaults.master,
        };
        self.set_view(view, columns);
    }
}

/// The whole application state: the canonical transfer collection plus
/// operator configuration. Serialized as one blob by the state store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    /// Canonical transfer collection; group views borrow from it.
    pub transfers: Vec<Transfer>,
    /// Exception table consulted at resolution time.
    pub exceptions: ExceptionTable,
    /// Per-route transport defaults set by the operator.
    pub transport_overrides: TransportOverrides,
    /// Per-view column layouts.
    #[serde(default)]
    pub columns: ColumnSettings,
    /// Display language.
    #[serde(default)]
    pub language: Language,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            transfers: Vec::new(),
            exceptions: default_exceptions(),
            transport_overrides: IndexMap::new(),
            columns: ColumnSettings::default(),
            language: Language::default(),
        }
    }
}

impl AppState {
    /// Swap in a freshly assembled transfer collection (pipeline output).
    /// Called only after the whole pipeline succeeded, so a failed run can
    /// never corrupt previously valid state.
    pub fn replace_transfers(&mut self, transfers: Vec<Transfer>) {
        self.transfers = transfers;
    }

    /// Append a manually created transfer.
    pub fn add_transfer(&mut self, transfer: Transfer) {
        self.transfers.push(transfer);
    }

    /// Remove a transfer by id. Returns false when no such transfer exists.
    /// The group index reflects the removal on the next regroup; a group
    /// losing its last member disappears with it.
    pub fn remove_transfer(&mut self, id: &str) -> bool {
        let before = self.transfers.len();
        self.transfers.retain(|t| t.id != id);
        self.transfers.len() != before
    }

    /// Edit one transfer in place. When the edit changed the worker's name,
    /// the parsed name parts and the identity are re-derived, so the
    /// returned id may differ from the one passed in.
    pub fn update_transfer<F>(&mut self, id: &str, edit: F) -> Option<WorkerId>
    where
        F: FnOnce(&mut Transfer),
    {
        let transfer = self.transfers.iter_mut().find(|t| t.id == id)?;
        let name_before = transfer.name.clone();
        edit(transfer);
        if transfer.name != name_before {
            let (last_name, first_name) = split_name(&transfer.name);
            transfer.last_name = last_name;
            transfer.first_name = first_name;
            transfer.id = normalized_name(&transfer.name);
        }
        Some(transfer.id.clone())
    }

    /// Look up a transfer by id.
    pub fn transfer(&self, id: &str) -> Option<&Transfer> {
        self.transfers.iter().find(|t| t.id == id)
    }

    /// Compute a group view over the current collection.
    pub fn groups(&self, by: GroupBy) -> IndexMap<GroupKey, Vec<&Transfer>> {
        regroup(&self.transfers, by)
    }

    /// Add or replace an exception rule.
    pub fn add_exception(&mut self, key: MatchKey, city: CityName) {
        self.exceptions.insert(key, city);
    }

    /// Remove an exception rule. Returns false when the key was absent.
    pub fn remove_exception(&mut self, key: &str) -> bool {
        self.exceptions.shift_remove(key).is_some()
    }

    /// Set the operator's default transport for one route.
    pub fn set_transport_override(&mut self, route: RouteKey, mode: TransportMode) {
        self.transport_overrides.insert(route, mode);
    }

    /// Drop the operator's default for one route, falling back to policy.
    pub fn clear_transport_override(&mut self, route: &str) -> bool {
        self.transport_overrides.shift_remove(route).is_some()
    }
}
