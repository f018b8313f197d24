//! Testing utilities for quorum decisions.

use crate::ack::AckIndexMap;
use crate::index::Index;
use crate::vote::VoteRecord;
use crate::voters::VoterId;

/// Builds an [`AckIndexMap`] from `(voter_id, acked_index)` pairs, for testing
/// purposes.
pub fn acks(x: impl IntoIterator<Item = (VoterId, Index)>) -> AckIndexMap {
    AckIndexMap::from_iter(x)
}

/// Builds a [`VoteRecord`] from `(voter_id, granted)` pairs, for testing
/// purposes.
///
/// # Panics
///
/// If a voter votes twice differently.
pub fn votes(x: impl IntoIterator<Item = (VoterId, bool)>) -> VoteRecord {
    let mut r = VoteRecord::new();
    for (voter_id, granted) in x {
        r.record(voter_id, granted)
            .unwrap_or_else(|e| panic!("invalid test votes: {}", e));
    }
    r
}
