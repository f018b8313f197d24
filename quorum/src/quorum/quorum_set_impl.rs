use std::collections::BTreeSet;

use crate::quorum::quorum_set::QuorumSet;

/// Impl a simple majority quorum set.
///
/// An empty set has no member to disagree, thus any ids, even none, form a
/// quorum of it.
impl<ID> QuorumSet<ID> for BTreeSet<ID>
where ID: PartialOrd + Ord + Clone + 'static
{
    type Iter = std::collections::btree_set::IntoIter<ID>;

    fn is_quorum<'a, I: Iterator<Item = &'a ID> + Clone>(
        &self,
        ids: I,
    ) -> bool {
        let limit = self.len();
        if limit == 0 {
            return true;
        }

        let mut count = 0;
        let mut seen = BTreeSet::new();
        for id in ids {
            if self.contains(id) && seen.insert(id) {
                count += 2;
                if count > limit {
                    return true;
                }
            }
        }
        false
    }

    fn ids(&self) -> Self::Iter {
        self.clone().into_iter()
    }
}
