use crate::{kernel, validate, Result, Scalar};
use array::Arr2;

/// Returns the complex conjugate of interleaved `c`.
///
/// Real lanes are copied, imaginary lanes negated. The output has the shape
/// of `c`.
///
/// # Errors
///
/// [`Error::OddLeadingDimension`](crate::Error::OddLeadingDimension) if `c`
/// has an odd number of rows.
pub fn conjugate<T: Scalar>(c: &Arr2<T>) -> Result<Arr2<T>> {
    const OP: &str = "conjugate";
    log::trace!("{}: {:?}", OP, c.shape());
    validate::interleaved(OP, c.shape())?;
    Ok(kernel::conjugate(c))
}
