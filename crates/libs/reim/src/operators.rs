//! `*` bindings over the multiplication family.
//!
//! The right-hand side selects the operation:
//!
//! | expression               | operation                       |
//! |--------------------------|---------------------------------|
//! | `&a * &a_c` (complex)    | [`Interleaved::mul_complex`]    |
//! | `&a * Imag(&a_c)`        | [`Interleaved::mul_imag`]       |
//! | `&a * Imag(s)` (scalar)  | [`Interleaved::mul_imag_scalar`]|
//! | `&a * Re(&a_c)`          | [`Interleaved::mul_real`]       |
//! | `&a * &b` (interleaved)  | [`Interleaved::mul`]            |
//!
//! Everything but the scalar form yields a [`Result`] since the right-hand
//! side may not match the shape of `a`.

use crate::{Interleaved, Result, Scalar};
use array::Arr2;
use num_complex::Complex;
use std::ops::Mul;

/// Marks the right-hand side of `*` as the imaginary part of a complex value
/// whose real part is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Imag<A>(pub A);

/// Marks the right-hand side of `*` as the real part of a complex value whose
/// imaginary part is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Re<A>(pub A);

macro_rules! impl_mul {
    ($($lhs:ty),*) => {
        $(
            impl<'a, T: Scalar> Mul<&'a Arr2<Complex<T>>> for $lhs {
                type Output = Result<Interleaved<T>>;

                fn mul(self, rhs: &'a Arr2<Complex<T>>) -> Self::Output {
                    Interleaved::mul_complex(&self, rhs)
                }
            }

            impl<'a, T: Scalar> Mul<Imag<&'a Arr2<T>>> for $lhs {
                type Output = Result<Interleaved<T>>;

                fn mul(self, rhs: Imag<&'a Arr2<T>>) -> Self::Output {
                    Interleaved::mul_imag(&self, rhs.0)
                }
            }

            impl<'a, T: Scalar> Mul<Re<&'a Arr2<T>>> for $lhs {
                type Output = Result<Interleaved<T>>;

                fn mul(self, rhs: Re<&'a Arr2<T>>) -> Self::Output {
                    Interleaved::mul_real(&self, rhs.0)
                }
            }

            impl<'a, T: Scalar> Mul<&'a Interleaved<T>> for $lhs {
                type Output = Result<Interleaved<T>>;

                fn mul(self, rhs: &'a Interleaved<T>) -> Self::Output {
                    Interleaved::mul(&self, rhs)
                }
            }
        )*
    };
}

impl_mul!(Interleaved<T>, &Interleaved<T>);

// Spelled out per float type: a blanket `Imag<T>` impl would overlap with
// `Imag<&Arr2<T>>` as far as coherence can tell.
macro_rules! impl_mul_imag_scalar {
    ($($t:ty),*) => {
        $(
            impl Mul<Imag<$t>> for Interleaved<$t> {
                type Output = Interleaved<$t>;

                fn mul(self, rhs: Imag<$t>) -> Self::Output { self.mul_imag_scalar(rhs.0) }
            }

            impl Mul<Imag<$t>> for &Interleaved<$t> {
                type Output = Interleaved<$t>;

                fn mul(self, rhs: Imag<$t>) -> Self::Output { self.mul_imag_scalar(rhs.0) }
            }
        )*
    };
}

impl_mul_imag_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Interleaved<f64> {
        Interleaved::from_complex(&Arr2::from_rows(&[
            [Complex::new(3.0, 4.0)],
            [Complex::new(-1.0, 2.0)],
        ]))
    }

    #[test]
    fn test_operator_bindings() {
        let a = sample();
        let two = Arr2::from_rows(&[[2.0], [2.0]]);

        let by_real = (&a * Re(&two)).unwrap();
        assert_eq!(by_real.entry(0, 0), Complex::new(6.0, 8.0));

        let by_imag = (&a * Imag(&two)).unwrap();
        assert_eq!(by_imag, a.mul_imag(&two).unwrap());
        assert_eq!(by_imag.entry(0, 0), Complex::new(-8.0, 6.0));

        let rotated = &a * Imag(1.0);
        assert_eq!(rotated.entry(1, 0), Complex::new(-2.0, -1.0));

        let z = Arr2::from_rows(&[[Complex::new(3.0, 4.0)], [Complex::new(1.0, 0.0)]]);
        let by_complex = (&a * &z).unwrap();
        assert_eq!(by_complex.entry(0, 0), Complex::new(-7.0, 24.0));
        assert_eq!(by_complex.entry(1, 0), Complex::new(-1.0, 2.0));

        let squared = (&a * &a).unwrap();
        assert_eq!(squared.entry(0, 0), Complex::new(-7.0, 24.0));
        assert_eq!(squared.entry(1, 0), Complex::new(-3.0, -4.0));
    }

    #[test]
    fn test_operator_by_value() {
        let a = sample();
        let b = (a.clone() * &a).unwrap();
        assert_eq!(b.entry(0, 0), Complex::new(-7.0, 24.0));
        let c = a * Imag(2.0);
        assert_eq!(c.entry(0, 0), Complex::new(-8.0, 6.0));
    }

    #[test]
    fn test_operator_shape_mismatch() {
        let a = sample();
        assert!((&a * Re(&Arr2::zeros([4, 1]))).is_err());
        assert!((&a * Imag(&Arr2::zeros([2, 2]))).is_err());
        assert!((&a * &Interleaved::zeros(1, 1)).is_err());
    }
}
