use crate::vote::VoteRecord;
use crate::vote::VoteState;
use crate::voters::QuorumConfig;
use crate::voters::VoterSet;

/// The outcome of an election.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(derive_more::Display)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum VoteResult {
    /// Neither outcome is decided: it depends on votes not yet received.
    #[display("VotePending")]
    Pending,

    /// A quorum can not be reached even if every pending voter grants.
    #[display("VoteLost")]
    Lost,

    /// A quorum has granted.
    #[display("VoteWon")]
    Won,
}

impl VoteResult {
    /// Combine the results of the two sides of a joint config.
    ///
    /// A lost side loses the joint election, whatever the other side is.
    pub fn join(self, other: VoteResult) -> VoteResult {
        match (self, other) {
            (VoteResult::Lost, _) | (_, VoteResult::Lost) => VoteResult::Lost,
            (VoteResult::Won, VoteResult::Won) => VoteResult::Won,
            _ => VoteResult::Pending,
        }
    }
}

/// Returns the election result of `config` according to the votes in
/// `record`.
///
/// Votes of ids not in `config` are ignored. An empty voter set wins by
/// convention, so that a joint config with an empty side behaves like its
/// other side.
pub fn vote_result(config: &QuorumConfig, record: &VoteRecord) -> VoteResult {
    config.fold_majorities(
        |voters| majority_vote_result(voters, record),
        VoteResult::join,
    )
}

fn majority_vote_result(voters: &VoterSet, record: &VoteRecord) -> VoteResult {
    if voters.is_empty() {
        return VoteResult::Won;
    }

    let mut granted = 0;
    let mut rejected = 0;
    for id in voters.iter() {
        match record.state(id) {
            VoteState::Granted => granted += 1,
            VoteState::Rejected => rejected += 1,
            VoteState::Pending => {}
        }
    }

    let pending = voters.len() - granted - rejected;
    let q = voters.majority();

    if granted >= q {
        VoteResult::Won
    } else if granted + pending < q {
        VoteResult::Lost
    } else {
        VoteResult::Pending
    }
}
