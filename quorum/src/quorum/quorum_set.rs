/// A set of quorums is a collection of quorum.
///
/// A quorum is a collection of voters that a read or write operation in a
/// distributed system has to contact to. See: <http://web.mit.edu/6.033/2005/wwwdocs/quorum_note.html>
pub trait QuorumSet<ID: 'static> {
    type Iter: Iterator<Item = ID>;

    /// Check if a series of ID constitute a quorum that is defined by this
    /// quorum set.
    fn is_quorum<'a, I: Iterator<Item = &'a ID> + Clone>(
        &self,
        ids: I,
    ) -> bool;

    /// Returns all ids in this QuorumSet, in ascending order and without
    /// duplicates.
    fn ids(&self) -> Self::Iter;
}
