use crate::{
    kernel::{self, IM, RE},
    validate, Result, Scalar,
};
use array::Arr2;

/// Returns the real lanes of interleaved `c` as a split array of shape
/// `(nrows(c) / 2, ncols(c))`.
///
/// # Errors
///
/// [`Error::OddLeadingDimension`](crate::Error::OddLeadingDimension) if `c`
/// has an odd number of rows.
pub fn real_part<T: Scalar>(c: &Arr2<T>) -> Result<Arr2<T>> {
    const OP: &str = "real_part";
    log::trace!("{}: {:?}", OP, c.shape());
    validate::interleaved(OP, c.shape())?;
    Ok(kernel::extract(c, RE))
}

/// Returns the imaginary lanes of interleaved `c` as a split array of shape
/// `(nrows(c) / 2, ncols(c))`.
///
/// # Errors
///
/// [`Error::OddLeadingDimension`](crate::Error::OddLeadingDimension) if `c`
/// has an odd number of rows.
pub fn imaginary_part<T: Scalar>(c: &Arr2<T>) -> Result<Arr2<T>> {
    const OP: &str = "imaginary_part";
    log::trace!("{}: {:?}", OP, c.shape());
    validate::interleaved(OP, c.shape())?;
    Ok(kernel::extract(c, IM))
}
