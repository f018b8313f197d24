//! Error types exposed by this crate.

use crate::index::Index;
use crate::vote::VoteState;
use crate::voters::VoterId;

/// A voter tried to cast a vote conflicting with the one it already cast in
/// the same election.
///
/// The recorded vote is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[derive(serde::Deserialize, serde::Serialize)]
#[error("voter {voter_id} has voted {recorded}, can not change it to {attempted} in one election")]
pub struct DuplicateVote {
    pub voter_id: VoterId,
    pub recorded: VoteState,
    pub attempted: VoteState,
}

/// An acknowledged index update tried to go backward.
///
/// This is an expected race of message delivery: the update is absorbed and
/// the greater index is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[derive(serde::Deserialize, serde::Serialize)]
#[error("ack index of voter {voter_id} can not go backward: current: {current}, attempted: {attempted}")]
pub struct NonMonotonicUpdate {
    pub voter_id: VoterId,
    pub current: Index,
    pub attempted: Index,
}

/// There is no voter to form a majority, thus the committed index is
/// undefined.
///
/// It is different from committed index `0`, which means a quorum has not
/// acknowledged anything yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[derive(serde::Deserialize, serde::Serialize)]
#[error("no quorum: quorum config has no voter")]
pub struct NoQuorum {}
