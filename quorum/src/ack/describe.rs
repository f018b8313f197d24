use std::fmt;

use crate::ack::AckIndexMap;
use crate::index::Index;
use crate::voters::QuorumConfig;
use crate::voters::VoterId;
use crate::voters::VoterSet;

/// Returns a multi-line representation of the acked indexes of the voters in
/// `config`.
///
/// See [`Describe`].
pub fn describe(config: &QuorumConfig, acks: &AckIndexMap) -> String {
    let voters = VoterSet::from(config.voters());
    Describe {
        voters: &voters,
        acks,
    }
    .to_string()
}

/// Display the acked indexes of a voter set, one voter per line, in voter id
/// order, e.g.:
///
/// ```text
///        idx
/// x>     100    (id=1)
/// xx>    101    (id=2)
/// ?        0    (id=3)
/// ```
///
/// The length of the `x` bar is the rank of the index among all acked indexes
/// in ascending order; equal indexes have equal bars. A voter with no ack is
/// marked with `?`.
pub struct Describe<'a> {
    pub voters: &'a VoterSet,
    pub acks: &'a AckIndexMap,
}

struct Row {
    id: VoterId,
    idx: Index,
    acked: bool,
    bar: usize,
}

impl<'a> fmt::Display for Describe<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.voters.len();
        if n == 0 {
            return write!(f, "<empty majority quorum>");
        }

        let mut rows = self
            .voters
            .iter()
            .map(|id| {
                let got = self.acks.get(id);
                Row {
                    id: *id,
                    idx: got.unwrap_or(0),
                    acked: got.is_some(),
                    bar: 0,
                }
            })
            .collect::<Vec<_>>();

        rows.sort_by_key(|r| (r.idx, r.id));

        for i in 1..rows.len() {
            rows[i].bar = if rows[i - 1].idx < rows[i].idx {
                i
            } else {
                rows[i - 1].bar
            };
        }

        rows.sort_by_key(|r| r.id);

        writeln!(f, "{}    idx", " ".repeat(n))?;
        for r in rows.iter() {
            if r.acked {
                write!(f, "{}>{}", "x".repeat(r.bar), " ".repeat(n - r.bar))?;
            } else {
                write!(f, "?{}", " ".repeat(n))?;
            }
            writeln!(f, " {:>5}    (id={})", r.idx, r.id)?;
        }

        Ok(())
    }
}
