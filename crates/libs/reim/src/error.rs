use array::ShapeError;

/// Error raised by the kernel operations.
///
/// Every variant is raised before the offending call reads any element, so a
/// failed call never yields a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two operands that must agree in shape don't.
    ///
    /// Raised by the full complex multiply when the two interleaved arrays
    /// differ, and by the `mul_*` family when the second operand doesn't hold
    /// exactly one value per logical entry (`nx_r == 2 * nx_c` and the same
    /// batch count).
    #[error("{op}: expected operand of shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Name of the failing operation.
        op: &'static str,
        /// Shape the operand must have.
        expected: [usize; 2],
        /// Shape the operand has.
        actual: [usize; 2],
    },

    /// An array meant to be interleaved has an odd leading dimension, so its
    /// rows can't be paired into (real, imaginary) lanes.
    #[error("{op}: leading dimension {rows} is odd, real and imaginary lanes can't be paired")]
    OddLeadingDimension {
        /// Name of the failing operation.
        op: &'static str,
        /// Length of the leading dimension.
        rows: usize,
    },

    /// The storage array couldn't be built.
    #[error("Array error: {0}")]
    Array(#[from] ShapeError),
}

/// Result type of the kernel operations.
pub type Result<T> = std::result::Result<T, Error>;
