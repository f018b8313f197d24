use core::fmt;
use std::collections::BTreeSet;

use crate::quorum::QuorumSet;
use crate::voters::VoterId;
use crate::voters::VoterSet;

/// The voters whose agreement is required for a decision.
///
/// During a membership change the config is a joint of the outgoing and the
/// incoming voter set: a decision has to be made by a majority of **both**.
/// A voter may be a member of both sets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum QuorumConfig {
    /// A simple majority of one voter set.
    Single(VoterSet),

    /// A majority of `outgoing` and a majority of `incoming`.
    Joint {
        outgoing: VoterSet,
        incoming: VoterSet,
    },
}

impl Default for QuorumConfig {
    fn default() -> Self {
        QuorumConfig::Single(VoterSet::default())
    }
}

impl From<VoterSet> for QuorumConfig {
    fn from(voters: VoterSet) -> Self {
        QuorumConfig::Single(voters)
    }
}

/// Renders a joint config as `(1 2 3)&&(3 4 5)`, outgoing first. A joint
/// config with an empty outgoing set renders as its incoming set.
impl fmt::Display for QuorumConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuorumConfig::Single(voters) => write!(f, "{}", voters),
            QuorumConfig::Joint { outgoing, incoming } => {
                if outgoing.is_empty() {
                    write!(f, "{}", incoming)
                } else {
                    write!(f, "{}&&{}", outgoing, incoming)
                }
            }
        }
    }
}

impl QuorumConfig {
    pub fn single(voters: impl Into<VoterSet>) -> Self {
        QuorumConfig::Single(voters.into())
    }

    pub fn joint(
        outgoing: impl Into<VoterSet>,
        incoming: impl Into<VoterSet>,
    ) -> Self {
        QuorumConfig::Joint {
            outgoing: outgoing.into(),
            incoming: incoming.into(),
        }
    }

    pub fn is_joint(&self) -> bool {
        matches!(self, QuorumConfig::Joint { .. })
    }

    /// Returns the union of all voters participating in this config.
    pub fn voters(&self) -> BTreeSet<VoterId> {
        match self {
            QuorumConfig::Single(voters) => voters.as_btree_set().clone(),
            QuorumConfig::Joint { outgoing, incoming } => outgoing
                .as_btree_set()
                .union(incoming.as_btree_set())
                .copied()
                .collect(),
        }
    }

    /// Check if the voter participates in any of the voter sets.
    pub fn contains(&self, voter_id: &VoterId) -> bool {
        match self {
            QuorumConfig::Single(voters) => voters.contains(voter_id),
            QuorumConfig::Joint { outgoing, incoming } => {
                outgoing.contains(voter_id) || incoming.contains(voter_id)
            }
        }
    }

    /// Finish a membership change: the incoming set becomes the only set.
    ///
    /// A `Single` config is returned as is.
    pub fn leave_joint(&self) -> QuorumConfig {
        match self {
            QuorumConfig::Single(_) => self.clone(),
            QuorumConfig::Joint { incoming, .. } => {
                QuorumConfig::Single(incoming.clone())
            }
        }
    }

    /// Apply a per-majority calculation to every voter set and combine the
    /// results of the two sides of a joint config with `join`.
    ///
    /// The commit index and the vote result both use this to share one
    /// majority/combine pattern.
    pub(crate) fn fold_majorities<T, F, J>(&self, f: F, join: J) -> T
    where
        F: Fn(&VoterSet) -> T,
        J: FnOnce(T, T) -> T,
    {
        match self {
            QuorumConfig::Single(voters) => f(voters),
            QuorumConfig::Joint { outgoing, incoming } => {
                join(f(outgoing), f(incoming))
            }
        }
    }
}

impl QuorumSet<VoterId> for QuorumConfig {
    type Iter = std::collections::btree_set::IntoIter<VoterId>;

    fn is_quorum<'a, I: Iterator<Item = &'a VoterId> + Clone>(
        &self,
        ids: I,
    ) -> bool {
        self.fold_majorities(
            |voters| voters.is_quorum(ids.clone()),
            |a, b| a && b,
        )
    }

    fn ids(&self) -> Self::Iter {
        self.voters().into_iter()
    }
}
