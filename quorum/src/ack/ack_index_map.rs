use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::NonMonotonicUpdate;
use crate::index::Index;
use crate::voters::QuorumConfig;
use crate::voters::VoterId;

/// The latest log index acknowledged by every voter.
///
/// The index of a voter never decreases: a log is append-only, an ack of a
/// smaller index is a stale message and is ignored.
///
/// Lookups return owned values, no reference into the map survives a
/// mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct AckIndexMap {
    acked: BTreeMap<VoterId, Index>,
}

impl FromIterator<(VoterId, Index)> for AckIndexMap {
    fn from_iter<T: IntoIterator<Item = (VoterId, Index)>>(iter: T) -> Self {
        let mut m = AckIndexMap::new();
        for (voter_id, idx) in iter {
            m.upsert(voter_id, idx);
        }
        m
    }
}

impl AckIndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the acked index of a voter to `idx`, if it does not go
    /// backward.
    ///
    /// It returns the index stored for the voter after this call, or an error
    /// carrying the current index if `idx` is smaller than it. Setting the
    /// same index again is not an error.
    pub fn increase_to(
        &mut self,
        voter_id: VoterId,
        idx: Index,
    ) -> Result<Index, NonMonotonicUpdate> {
        let current = self.acked.entry(voter_id).or_insert(idx);

        if idx < *current {
            return Err(NonMonotonicUpdate {
                voter_id,
                current: *current,
                attempted: idx,
            });
        }

        *current = idx;
        Ok(idx)
    }

    /// Set the acked index of a voter to `max(existing, idx)`.
    ///
    /// A smaller `idx` is a no-op.
    pub fn upsert(&mut self, voter_id: VoterId, idx: Index) {
        if let Err(e) = self.increase_to(voter_id, idx) {
            debug!("{}: ignored: {}", func_name!(), e);
        }
    }

    /// Returns the acked index of a voter, `None` if nothing is recorded.
    pub fn get(&self, voter_id: &VoterId) -> Option<Index> {
        self.acked.get(voter_id).copied()
    }

    /// Returns the acked index of a voter for quorum calculation: an absent
    /// voter has acked nothing, i.e., index `0`.
    pub(crate) fn acked_or_zero(&self, voter_id: &VoterId) -> Index {
        self.get(voter_id).unwrap_or(0)
    }

    /// Remove a voter that has left the active config, so that it no longer
    /// affects quorum calculation.
    pub fn remove(&mut self, voter_id: &VoterId) -> Option<Index> {
        let removed = self.acked.remove(voter_id);
        if let Some(idx) = removed {
            debug!(
                "{}: voter {} removed, acked: {}",
                func_name!(),
                voter_id,
                idx
            );
        }
        removed
    }

    /// Remove every voter that does not participate in `config`.
    ///
    /// Returns the ids of removed voters in ascending order.
    pub fn retain_config(&mut self, config: &QuorumConfig) -> Vec<VoterId> {
        let stale = self
            .acked
            .keys()
            .filter(|id| !config.contains(id))
            .copied()
            .collect::<Vec<_>>();

        for id in stale.iter() {
            self.remove(id);
        }
        stale
    }

    /// Returns an Iterator of `(voter_id, acked_index)` in voter id order.
    pub fn entries(&self) -> impl Iterator<Item = (VoterId, Index)> + '_ {
        self.acked.iter().map(|(id, idx)| (*id, *idx))
    }

    pub fn len(&self) -> usize {
        self.acked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acked.is_empty()
    }
}
