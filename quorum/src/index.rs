//! Log index and its diagnostic rendering.

use std::fmt;

/// A position in the replicated log.
///
/// `0` means nothing is acknowledged yet.
pub type Index = u64;

/// Writes the text form of an optional index into a caller-owned buffer.
///
/// `None` is written as `∅`, so that an absent ack is never mistaken for `0`.
/// A present index, including `u64::MAX`, is written in decimal.
pub fn format_index<W>(w: &mut W, idx: Option<Index>) -> fmt::Result
where W: fmt::Write {
    match idx {
        None => w.write_str("∅"),
        Some(i) => write!(w, "{}", i),
    }
}

/// Display an optional [`Index`] with [`format_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayIndex(pub Option<Index>);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_index(f, self.0)
    }
}
