use std::fmt;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::ack;
use crate::ack::AckIndexMap;
use crate::base::display_ext::DisplaySliceExt;
use crate::errors::DuplicateVote;
use crate::errors::NoQuorum;
use crate::index::DisplayIndex;
use crate::index::Index;
use crate::vote;
use crate::vote::VoteRecord;
use crate::vote::VoteResult;
use crate::vote::VoteState;
use crate::voters::QuorumConfig;
use crate::voters::VoterId;

/// Tracks acked log indexes and election votes of the voters of a
/// [`QuorumConfig`].
///
/// A `Tracker` is owned by the single driver of a node, e.g., the leader or
/// candidate loop, and is updated by one message at a time. The decisions,
/// [`Self::committed_index`] and [`Self::vote_result`], are pure reads of the
/// current state and can be called after every update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tracker {
    config: QuorumConfig,
    acks: AckIndexMap,
    votes: VoteRecord,
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{config:{}, acks:[", self.config)?;

        for (i, (id, idx)) in self.acks.entries().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", id, idx)?;
        }

        write!(f, "], votes:[")?;

        for (i, (id, st)) in self.votes.entries().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", id, st)?;
        }

        write!(f, "]}}")
    }
}

impl Tracker {
    pub fn new(config: QuorumConfig) -> Self {
        Self {
            config,
            acks: AckIndexMap::new(),
            votes: VoteRecord::new(),
        }
    }

    pub fn config(&self) -> &QuorumConfig {
        &self.config
    }

    pub fn acks(&self) -> &AckIndexMap {
        &self.acks
    }

    pub fn votes(&self) -> &VoteRecord {
        &self.votes
    }

    /// Switch to a new quorum config, e.g., entering or leaving a joint
    /// config.
    ///
    /// Acks of voters that are not in the new config are removed so that they
    /// do not affect later decisions. The ids of removed voters are returned.
    pub fn apply_config(&mut self, config: QuorumConfig) -> Vec<VoterId> {
        let removed = self.acks.retain_config(&config);

        info!(
            "{}: quorum config changed from {} to {}, removed acks of: {}",
            func_name!(),
            self.config,
            config,
            removed.display()
        );

        self.config = config;
        removed
    }

    /// Record the log index acknowledged by a voter; an index smaller than
    /// the recorded one is ignored.
    ///
    /// An ack from a node that is not a voter of the current config is
    /// dropped.
    pub fn upsert_ack(&mut self, voter_id: VoterId, idx: Index) {
        if !self.config.contains(&voter_id) {
            debug!(
                "{}: ignored ack {} from non-voter {}, config: {}",
                func_name!(),
                idx,
                voter_id,
                self.config
            );
            return;
        }

        self.acks.upsert(voter_id, idx);
    }

    pub fn ack_of(&self, voter_id: &VoterId) -> Option<Index> {
        self.acks.get(voter_id)
    }

    /// Forget the ack of a voter that left the config.
    pub fn remove_voter(&mut self, voter_id: &VoterId) {
        self.acks.remove(voter_id);
    }

    /// Returns the greatest log index acknowledged by a quorum of the current
    /// config.
    pub fn committed_index(&self) -> Result<Index, NoQuorum> {
        let committed = ack::committed_index(&self.config, &self.acks);

        debug!(
            "{}: config: {}, committed: {}",
            func_name!(),
            self.config,
            DisplayIndex(committed.as_ref().ok().copied())
        );

        committed
    }

    /// Returns a multi-line diagnostic of the acked indexes, see
    /// [`ack::Describe`].
    pub fn describe(&self) -> String {
        ack::describe(&self.config, &self.acks)
    }

    pub fn register_voter_for_vote(&mut self, voter_id: VoterId) {
        self.votes.register(voter_id);
    }

    /// Record a vote response of a voter in the current election.
    pub fn record_vote(
        &mut self,
        voter_id: VoterId,
        granted: bool,
    ) -> Result<(), DuplicateVote> {
        self.votes.record(voter_id, granted).inspect_err(|e| {
            warn!("{}: {}", func_name!(), e);
        })
    }

    pub fn vote_state(&self, voter_id: &VoterId) -> VoteState {
        self.votes.state(voter_id)
    }

    /// Returns the result of the current election.
    pub fn vote_result(&self) -> VoteResult {
        let res = vote::vote_result(&self.config, &self.votes);

        debug!("{}: config: {}, result: {}", func_name!(), self.config, res);
        res
    }

    /// Discard all votes to start a new election.
    ///
    /// Every voter of the current config is registered as pending.
    pub fn reset_votes(&mut self) {
        self.votes = VoteRecord::new();
        for id in self.config.voters() {
            self.votes.register(id);
        }

        info!("{}: votes reset for config: {}", func_name!(), self.config);
    }
}
