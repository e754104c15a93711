//! # reim
//! Complex arithmetic on real arrays holding interleaved complex values.
//!
//! A logical complex array of shape `(n, m)` is stored as a real [`Arr2`] of
//! shape `(2n, m)`. Along the first (fastest varying) dimension, row `2k`
//! holds the real part and row `2k + 1` the imaginary part of entry `k`; the
//! second dimension is a batch of independent columns.
//!
//! The operations come in two flavours sharing the same column kernels:
//!
//! - free functions on raw storage ([`mul_complex`], [`mul_imag`],
//!   [`mul_imag_scalar`], [`mul_real`], [`multiply`], [`conjugate`],
//!   [`magnitude`], [`real_part`], [`imaginary_part`]), which validate every
//!   shape they are given;
//! - the [`Interleaved`] container, which checks the real/imaginary pairing
//!   once at construction and exposes the same arithmetic as methods and as
//!   `*` operators (see [`Imag`] and [`Re`]).
//!
//! Every operation allocates exactly one fresh output and never mutates its
//! inputs. A shape violation is reported through the `log` facade and
//! returned as an [`Error`] before any element is touched.

#![warn(missing_docs)]

mod conj;
mod error;
mod extract;
mod interleaved;
mod kernel;
mod magnitude;
mod mul;
mod operators;
mod precision;
mod validate;

pub use array::{Arr2, MemLayout, ShapeError};
pub use conj::conjugate;
pub use error::{Error, Result};
pub use extract::{imaginary_part, real_part};
pub use interleaved::Interleaved;
pub use magnitude::magnitude;
pub use mul::{mul_complex, mul_imag, mul_imag_scalar, mul_real, multiply};
pub use num_complex::Complex;
pub use operators::{Imag, Re};
pub use precision::{Real, Scalar};
