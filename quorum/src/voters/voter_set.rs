use core::fmt;
use std::collections::BTreeSet;

use crate::quorum::QuorumSet;

/// `VoterId` identifies a cluster member that is entitled to acknowledge log
/// entries and to cast an election vote.
pub type VoterId = u64;

/// An immutable set of voters that makes decisions by majority.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct VoterSet {
    voters: BTreeSet<VoterId>,
}

impl From<BTreeSet<VoterId>> for VoterSet {
    fn from(voters: BTreeSet<VoterId>) -> Self {
        VoterSet { voters }
    }
}

impl<const N: usize> From<[VoterId; N]> for VoterSet {
    fn from(ids: [VoterId; N]) -> Self {
        Self::new(ids)
    }
}

impl FromIterator<VoterId> for VoterSet {
    fn from_iter<T: IntoIterator<Item = VoterId>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Renders as `(1 2 3)`, ids in ascending order.
impl fmt::Display for VoterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;

        for (i, id) in self.voters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", id)?;
        }

        write!(f, ")")
    }
}

impl VoterSet {
    /// Build a voter set from voter ids; repeated ids are merged.
    pub fn new<T>(ids: T) -> Self
    where T: IntoIterator<Item = VoterId> {
        VoterSet {
            voters: ids.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    pub fn contains(&self, voter_id: &VoterId) -> bool {
        self.voters.contains(voter_id)
    }

    /// Returns an Iterator of voter ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &VoterId> + Clone {
        self.voters.iter()
    }

    /// Returns voter ids as a sorted `Vec`.
    pub fn to_vec(&self) -> Vec<VoterId> {
        self.voters.iter().copied().collect()
    }

    /// The number of voters that constitutes a majority: `⌊n/2⌋ + 1`.
    ///
    /// For an empty set it is `1`, which can never be reached. Callers decide
    /// how a vacuous set resolves.
    pub fn majority(&self) -> usize {
        self.voters.len() / 2 + 1
    }

    pub(crate) fn as_btree_set(&self) -> &BTreeSet<VoterId> {
        &self.voters
    }
}

impl QuorumSet<VoterId> for VoterSet {
    type Iter = std::collections::btree_set::IntoIter<VoterId>;

    fn is_quorum<'a, I: Iterator<Item = &'a VoterId> + Clone>(
        &self,
        ids: I,
    ) -> bool {
        self.voters.is_quorum(ids)
    }

    fn ids(&self) -> Self::Iter {
        self.voters.ids()
    }
}
