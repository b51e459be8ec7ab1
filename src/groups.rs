//! Group index: derived partitions of the canonical transfer collection.

use indexmap::IndexMap;

use crate::constants::groups::MASTER_GROUP_KEY;
use crate::data::Transfer;
use crate::types::GroupKey;

/// Partitioning scheme for group views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupBy {
    /// One group per `origin -> destination` pair.
    CityPair,
    /// One group per transport mode.
    Transport,
    /// Single group holding every transfer.
    Master,
}

/// Partition transfers into named groups.
///
/// Groups are always recomputed from the canonical collection, never
/// incrementally patched, so an edit to a transfer's cities or transport is
/// reflected on the next call and index/collection divergence cannot occur.
/// Idempotent: the same unmutated input yields identical membership and
/// order. Keys are sorted ascending; members are ordered existing-first
/// (`is_new` ascending), then by last and first name. Groups that lose their
/// last member simply stop existing — no empty groups persist.
pub fn regroup(transfers: &[Transfer], by: GroupBy) -> IndexMap<GroupKey, Vec<&Transfer>> {
    let mut groups: IndexMap<GroupKey, Vec<&Transfer>> = IndexMap::new();
    for transfer in transfers {
        let key = match by {
            GroupBy::CityPair => transfer.route_key(),
            GroupBy::Transport => transfer.transport.as_str().to_string(),
            GroupBy::Master => MASTER_GROUP_KEY.to_string(),
        };
        groups.entry(key).or_default().push(transfer);
    }
    groups.sort_keys();
    for members in groups.values_mut() {
        members.sort_by(|a, b| {
            (a.is_new, &a.last_name, &a.first_name).cmp(&(b.is_new, &b.last_name, &b.first_name))
        });
    }
    groups
}
