//! Implement [`fmt::Display`] for slice `&[T]`.

use std::fmt;

/// Implement `Display` for `&[T]` if T is `Display`.
///
/// It outputs at most `MAX` elements, excluding those from the 5th to the
/// second-to-last one:
/// - `DisplaySlice(&[1,2,3,4,5,6])` outputs: `"[1,2,3,4,..,6]"`.
pub struct DisplaySlice<'a, T: fmt::Display, const MAX: usize = 5>(
    pub &'a [T],
);

impl<'a, T: fmt::Display, const MAX: usize> fmt::Display
    for DisplaySlice<'a, T, MAX>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slice = self.0;
        let len = slice.len();

        write!(f, "[")?;

        if len > MAX {
            for (i, t) in slice[..(MAX - 1)].iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", t)?;
            }

            if let Some(last) = slice.last() {
                write!(f, ",..,{}", last)?;
            }
        } else {
            for (i, t) in slice.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", t)?;
            }
        }

        write!(f, "]")
    }
}

pub trait DisplaySliceExt<'a, T: fmt::Display> {
    fn display(&'a self) -> DisplaySlice<'a, T>;
}

impl<'a, T> DisplaySliceExt<'a, T> for Vec<T>
where T: fmt::Display
{
    fn display(&'a self) -> DisplaySlice<'a, T> {
        DisplaySlice(self.as_slice())
    }
}
