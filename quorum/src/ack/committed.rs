use crate::ack::AckIndexMap;
use crate::errors::NoQuorum;
use crate::index::Index;
use crate::voters::QuorumConfig;
use crate::voters::VoterSet;

/// Voter sets up to this size are sorted in a stack buffer.
const STACK_VOTERS: usize = 7;

/// Returns the greatest index that is acknowledged by a quorum of `config`.
///
/// A joint config commits the smaller one of the indexes committed by its
/// outgoing and incoming sets. An empty set in a joint config does not
/// constrain the other side. If no set has a voter, there is no committed
/// index at all and [`NoQuorum`] is returned.
pub fn committed_index(
    config: &QuorumConfig,
    acks: &AckIndexMap,
) -> Result<Index, NoQuorum> {
    let committed = config.fold_majorities(
        |voters| majority_committed(voters, acks),
        |a, b| match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (x, None) | (None, x) => x,
        },
    );

    committed.ok_or(NoQuorum {})
}

/// The committed index of one majority voter set, `None` if the set is empty.
///
/// Sorted in descending order, the index at rank `majority` is acknowledged
/// by at least `majority` voters, and it is the greatest such index.
fn majority_committed(
    voters: &VoterSet,
    acks: &AckIndexMap,
) -> Option<Index> {
    let n = voters.len();
    if n == 0 {
        return None;
    }

    let mut stk = [0; STACK_VOTERS];
    let mut heap: Vec<Index>;
    let srt: &mut [Index] = if n <= STACK_VOTERS {
        &mut stk[..n]
    } else {
        heap = vec![0; n];
        &mut heap
    };

    for (slot, id) in srt.iter_mut().zip(voters.iter()) {
        *slot = acks.acked_or_zero(id);
    }

    srt.sort_unstable_by(|a, b| b.cmp(a));

    Some(srt[voters.majority() - 1])
}
