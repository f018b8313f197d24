use std::collections::BTreeMap;

use crate::errors::DuplicateVote;
use crate::voters::VoterId;

/// The response of a voter to a vote request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(derive_more::Display)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum VoteState {
    /// No response yet.
    #[default]
    #[display("pending")]
    Pending,

    #[display("granted")]
    Granted,

    #[display("rejected")]
    Rejected,
}

impl VoteState {
    pub fn from_granted(granted: bool) -> Self {
        if granted {
            VoteState::Granted
        } else {
            VoteState::Rejected
        }
    }

    pub fn is_decided(&self) -> bool {
        *self != VoteState::Pending
    }
}

/// Vote responses received in a single election.
///
/// A record must not be reused across elections: create a new one for every
/// election attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct VoteRecord {
    votes: BTreeMap<VoterId, VoteState>,
}

impl VoteRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a voter with [`VoteState::Pending`] if it is not yet recorded.
    pub fn register(&mut self, voter_id: VoterId) {
        self.votes.entry(voter_id).or_default();
    }

    /// Record the vote response of a voter.
    ///
    /// A voter can vote only once in an election: repeating the same vote is
    /// fine, but a conflicting one is rejected with [`DuplicateVote`] and the
    /// recorded vote is kept.
    pub fn record(
        &mut self,
        voter_id: VoterId,
        granted: bool,
    ) -> Result<(), DuplicateVote> {
        let attempted = VoteState::from_granted(granted);
        let st = self.votes.entry(voter_id).or_default();

        if st.is_decided() && *st != attempted {
            return Err(DuplicateVote {
                voter_id,
                recorded: *st,
                attempted,
            });
        }

        *st = attempted;
        Ok(())
    }

    /// Returns the vote state of a voter; a voter never registered is
    /// [`VoteState::Pending`].
    pub fn state(&self, voter_id: &VoterId) -> VoteState {
        self.votes.get(voter_id).copied().unwrap_or_default()
    }

    /// Returns an Iterator of `(voter_id, state)` in voter id order.
    pub fn entries(&self) -> impl Iterator<Item = (VoterId, VoteState)> + '_ {
        self.votes.iter().map(|(id, st)| (*id, *st))
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}
