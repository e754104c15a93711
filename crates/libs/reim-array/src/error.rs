/// Error raised when an array cannot be built from the given buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The buffer length doesn't match the number of elements of the shape.
    #[error("buffer of length {len} doesn't fit shape {shape:?}")]
    LengthMismatch {
        /// Requested shape.
        shape: [usize; 2],
        /// Length of the provided buffer.
        len: usize,
    },
    /// The number of elements of the shape doesn't fit in `usize`.
    #[error("shape {shape:?} holds more elements than fit in usize")]
    TooLarge {
        /// Requested shape.
        shape: [usize; 2],
    },
}
