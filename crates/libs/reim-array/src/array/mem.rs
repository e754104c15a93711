use core::fmt::Write;

/// Memory layout of a multidimensional array.
///
/// The memory layout determines how the elements of the array are ordered in
/// the contiguous block of memory backing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemLayout {
    /// Row-major layout (or C layout). The data is stored row by row in memory;
    /// the strides grow from right to left; the last dimension varies the
    /// fastest.
    RowMajor,
    /// Column-major layout (or Fortran layout). The data is stored column by
    /// column in memory; the strides grow from left to right; the first
    /// dimension varies the fastest.
    ColMajor,
}

pub(crate) fn print_slice<A>(f: &mut ::core::fmt::Formatter<'_>, seq: &[A]) -> ::core::fmt::Result
where
    A: ::core::fmt::Display,
{
    f.write_char('[')?;
    for (i, x) in seq.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", x)?;
    }
    f.write_char(']')
}
