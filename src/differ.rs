//! Roster snapshot comparison.

use std::collections::HashMap;

use tracing::debug;

use crate::data::{LocationTuple, Worker};
use crate::types::WorkerId;

/// A worker present in both boards whose position changed, paired with the
/// position they are leaving.
#[derive(Clone, Debug)]
pub struct TransferredWorker {
    /// Identity computed by the injected identity function.
    pub id: WorkerId,
    /// The worker as listed on the new board (destination position).
    pub worker: Worker,
    /// Position from the old board (origin).
    pub old_location: LocationTuple,
}

/// A worker present only on the new board.
#[derive(Clone, Debug)]
pub struct NewArrival {
    /// Identity computed by the injected identity function.
    pub id: WorkerId,
    /// The worker as listed on the new board.
    pub worker: Worker,
}

/// Output of [`diff`]: movers and first appearances. Workers whose position
/// did not change are dropped entirely. Order is not significant; display
/// ordering is applied by the group index.
#[derive(Clone, Debug, Default)]
pub struct DiffResult {
    /// Workers whose zone, district, or area changed between the boards.
    pub transferred: Vec<TransferredWorker>,
    /// Workers with no matching old-board entry.
    pub new_arrivals: Vec<NewArrival>,
}

impl DiffResult {
    /// Total number of workers the assembler will produce transfers for.
    pub fn len(&self) -> usize {
        self.transferred.len() + self.new_arrivals.len()
    }

    /// True when neither movers nor arrivals were found.
    pub fn is_empty(&self) -> bool {
        self.transferred.is_empty() && self.new_arrivals.is_empty()
    }
}

/// Compare two roster snapshots keyed by worker identity.
///
/// A change in any of zone/district/area counts as a transfer; checking the
/// area alone produces false negatives when a worker moves between zones
/// while keeping an identically-named area. Workers whose identity comes
/// back empty are skipped, never abort the diff. When two rows normalize to
/// the same identity the later row wins silently (see [`crate::identity`]).
pub fn diff<F>(old: &[Worker], new: &[Worker], identity: F) -> DiffResult
where
    F: Fn(&str) -> WorkerId,
{
    let mut old_index: HashMap<WorkerId, &Worker> = HashMap::with_capacity(old.len());
    for worker in old {
        let id = identity(&worker.name);
        if id.is_empty() {
            debug!(name = %worker.name, "skipping old-board row with unusable identity");
            continue;
        }
        old_index.insert(id, worker);
    }

    let mut result = DiffResult::default();
    for worker in new {
        let id = identity(&worker.name);
        if id.is_empty() {
            debug!(name = %worker.name, "skipping new-board row with unusable identity");
            continue;
        }
        match old_index.get(&id) {
            Some(previous) => {
                if previous.location != worker.location {
                    result.transferred.push(TransferredWorker {
                        id,
                        worker: worker.clone(),
                        old_location: previous.location.clone(),
                    });
                }
            }
            None => result.new_arrivals.push(NewArrival {
                id,
                worker: worker.clone(),
            }),
        }
    }
    result
}
