//! Shape checks shared by the operations. Each failure is logged once.

use crate::{Error, Result};

/// Checks that `shape` can hold interleaved (real, imaginary) pairs.
pub(crate) fn interleaved(op: &'static str, shape: [usize; 2]) -> Result<()> {
    if shape[0] % 2 != 0 {
        log::error!(
            "{}: interleaved array of shape {:?} has an odd leading dimension",
            op,
            shape
        );
        return Err(Error::OddLeadingDimension { op, rows: shape[0] });
    }
    Ok(())
}

/// Checks that `operand` holds one value per logical entry of the interleaved
/// array of shape `shape`.
///
/// `shape` must already have passed [`interleaved`].
pub(crate) fn paired(op: &'static str, shape: [usize; 2], operand: [usize; 2]) -> Result<()> {
    let expected = [shape[0] / 2, shape[1]];
    if operand != expected {
        log::error!(
            "{}: interleaved array of shape {:?} paired with operand of shape {:?}, expected {:?}",
            op,
            shape,
            operand,
            expected
        );
        return Err(Error::ShapeMismatch {
            op,
            expected,
            actual: operand,
        });
    }
    Ok(())
}

/// Checks that two arrays have the same shape.
pub(crate) fn same(op: &'static str, lhs: [usize; 2], rhs: [usize; 2]) -> Result<()> {
    if lhs != rhs {
        log::error!("{}: shape mismatch {:?} vs {:?}", op, lhs, rhs);
        return Err(Error::ShapeMismatch {
            op,
            expected: lhs,
            actual: rhs,
        });
    }
    Ok(())
}
