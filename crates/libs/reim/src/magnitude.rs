use crate::{kernel, validate, Result, Scalar};
use array::Arr2;

/// Returns the modulus `sqrt(re^2 + im^2)` of every entry of interleaved `c`.
///
/// The output is a split array of shape `(nrows(c) / 2, ncols(c))`.
///
/// # Errors
///
/// [`Error::OddLeadingDimension`](crate::Error::OddLeadingDimension) if `c`
/// has an odd number of rows.
pub fn magnitude<T: Scalar>(c: &Arr2<T>) -> Result<Arr2<T>> {
    const OP: &str = "magnitude";
    log::trace!("{}: {:?}", OP, c.shape());
    validate::interleaved(OP, c.shape())?;
    Ok(kernel::magnitude(c))
}
