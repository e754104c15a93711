//! Multiplication family.
//!
//! `a` is always interleaved storage of shape `(2 * nx_c, ny)`. The second
//! operand holds one value per logical entry, shape `(nx_c, ny)`, and is read
//! as a full complex value, as the imaginary part of a complex value whose
//! real part is zero, or as the real part of one whose imaginary part is
//! zero. The one-sided variants skip the products against the zero part.

use crate::{kernel, validate, Result, Scalar};
use array::Arr2;
use num_complex::Complex;

/// Multiplies interleaved `a` by the native complex array `a_c`.
///
/// `b[2k] = a[2k] * re(a_c[k]) - a[2k + 1] * im(a_c[k])` and
/// `b[2k + 1] = a[2k] * im(a_c[k]) + a[2k + 1] * re(a_c[k])`.
///
/// # Errors
///
/// [`Error::OddLeadingDimension`](crate::Error::OddLeadingDimension) if `a`
/// has an odd number of rows,
/// [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if `a_c` isn't of
/// shape `(nrows(a) / 2, ncols(a))`.
pub fn mul_complex<T: Scalar>(a: &Arr2<T>, a_c: &Arr2<Complex<T>>) -> Result<Arr2<T>> {
    const OP: &str = "mul_complex";
    log::trace!("{}: {:?} x {:?}", OP, a.shape(), a_c.shape());
    validate::interleaved(OP, a.shape())?;
    validate::paired(OP, a.shape(), a_c.shape())?;
    Ok(kernel::mul_complex(a, a_c))
}

/// Multiplies interleaved `a` by the purely imaginary array `i * a_c`.
///
/// `b[2k] = -a[2k + 1] * a_c[k]` and `b[2k + 1] = a[2k] * a_c[k]`. The real
/// part of the true operand is taken as zero and never read; making sure it
/// is zero is up to the caller.
///
/// # Errors
///
/// Same as [`mul_complex`].
pub fn mul_imag<T: Scalar>(a: &Arr2<T>, a_c: &Arr2<T>) -> Result<Arr2<T>> {
    const OP: &str = "mul_imag";
    log::trace!("{}: {:?} x {:?}", OP, a.shape(), a_c.shape());
    validate::interleaved(OP, a.shape())?;
    validate::paired(OP, a.shape(), a_c.shape())?;
    Ok(kernel::mul_imag(a, a_c))
}

/// Multiplies every entry of interleaved `a` by the purely imaginary scalar
/// `i * s`.
///
/// With `s = 1` each entry is rotated by 90 degrees: `(re, im)` becomes
/// `(-im, re)`.
///
/// # Errors
///
/// [`Error::OddLeadingDimension`](crate::Error::OddLeadingDimension) if `a`
/// has an odd number of rows.
pub fn mul_imag_scalar<T: Scalar>(a: &Arr2<T>, s: T) -> Result<Arr2<T>> {
    const OP: &str = "mul_imag_scalar";
    log::trace!("{}: {:?} x {:?}", OP, a.shape(), s);
    validate::interleaved(OP, a.shape())?;
    Ok(kernel::mul_imag_scalar(a, s))
}

/// Multiplies interleaved `a` by the purely real array `a_c`.
///
/// `b[2k] = a[2k] * a_c[k]` and `b[2k + 1] = a[2k + 1] * a_c[k]`.
///
/// # Errors
///
/// Same as [`mul_complex`].
pub fn mul_real<T: Scalar>(a: &Arr2<T>, a_c: &Arr2<T>) -> Result<Arr2<T>> {
    const OP: &str = "mul_real";
    log::trace!("{}: {:?} x {:?}", OP, a.shape(), a_c.shape());
    validate::interleaved(OP, a.shape())?;
    validate::paired(OP, a.shape(), a_c.shape())?;
    Ok(kernel::mul_real(a, a_c))
}

/// Multiplies two interleaved arrays entry by entry with the complex product
/// rule.
///
/// # Errors
///
/// [`Error::OddLeadingDimension`](crate::Error::OddLeadingDimension) if
/// either array has an odd number of rows,
/// [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the shapes
/// differ.
pub fn multiply<T: Scalar>(c1: &Arr2<T>, c2: &Arr2<T>) -> Result<Arr2<T>> {
    const OP: &str = "multiply";
    log::trace!("{}: {:?} x {:?}", OP, c1.shape(), c2.shape());
    validate::interleaved(OP, c1.shape())?;
    validate::interleaved(OP, c2.shape())?;
    validate::same(OP, c1.shape(), c2.shape())?;
    Ok(kernel::multiply(c1, c2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn setup() { let _ = env_logger::builder().is_test(true).try_init(); }

    #[test]
    fn test_mul_real_scales_both_lanes() {
        setup();
        // 3 + 4i times 2
        let a = Arr2::from_rows(&[[3.0], [4.0]]);
        let a_c = Arr2::from_rows(&[[2.0]]);
        let b = mul_real(&a, &a_c).unwrap();
        assert_eq!(b, Arr2::from_rows(&[[6.0], [8.0]]));
    }

    #[test]
    fn test_mul_imag() {
        setup();
        // (3 + 4i) * 2i = -8 + 6i
        let a = Arr2::from_rows(&[[3.0f32], [4.0]]);
        let a_c = Arr2::from_rows(&[[2.0f32]]);
        let b = mul_imag(&a, &a_c).unwrap();
        assert_eq!(b.as_slice(), &[-8.0, 6.0]);
    }

    #[test]
    fn test_mul_imag_scalar_rotates() {
        setup();
        let a = Arr2::from_rows(&[[1.0, -2.0], [2.0, 0.5], [3.0, 7.0], [4.0, -1.0]]);
        let b = mul_imag_scalar(&a, 1.0).unwrap();
        assert_eq!(
            b,
            Arr2::from_rows(&[[-2.0, -0.5], [1.0, -2.0], [-4.0, 1.0], [3.0, 7.0]])
        );
    }

    #[test]
    fn test_mul_complex() {
        setup();
        // (1 + 2i)(3 + 4i) = -5 + 10i, (1 - i)(0 + 2i) = 2 + 2i
        let a = Arr2::from_rows(&[[1.0], [2.0], [1.0], [-1.0]]);
        let a_c = Arr2::from_rows(&[[Complex::new(3.0, 4.0)], [Complex::new(0.0, 2.0)]]);
        let b = mul_complex(&a, &a_c).unwrap();
        assert_eq!(b.as_slice(), &[-5.0, 10.0, 2.0, 2.0]);
    }

    #[test]
    fn test_multiply() {
        setup();
        let c1 = Arr2::from_rows(&[[1.0, 0.0], [2.0, 1.0]]);
        let c2 = Arr2::from_rows(&[[3.0, 0.0], [4.0, 1.0]]);
        let b = multiply(&c1, &c2).unwrap();
        // 1 + 2i times 3 + 4i, i times i
        assert_eq!(b, Arr2::from_rows(&[[-5.0, -1.0], [10.0, 0.0]]));
    }

    #[test]
    fn test_operand_rows_must_be_half() {
        setup();
        let a = Arr2::<f64>::zeros([4, 1]);
        let a_c = Arr2::<f64>::zeros([3, 1]);
        assert_eq!(
            mul_real(&a, &a_c),
            Err(Error::ShapeMismatch {
                op: "mul_real",
                expected: [2, 1],
                actual: [3, 1]
            })
        );
        // Passing the operand at full height is the classic slip.
        assert!(mul_imag(&a, &Arr2::zeros([4, 1])).is_err());
        assert!(mul_complex(&a, &Arr2::zeros([2, 2])).is_err());
    }

    #[test]
    fn test_odd_rows_rejected_first() {
        setup();
        let a = Arr2::<f64>::zeros([3, 2]);
        assert_eq!(
            mul_imag_scalar(&a, 1.0),
            Err(Error::OddLeadingDimension {
                op: "mul_imag_scalar",
                rows: 3
            })
        );
        assert!(matches!(
            mul_real(&a, &Arr2::zeros([1, 2])),
            Err(Error::OddLeadingDimension { rows: 3, .. })
        ));
    }

    #[test]
    fn test_multiply_shape_mismatch() {
        setup();
        let c1 = Arr2::<f64>::zeros([2, 2]);
        let c2 = Arr2::<f64>::zeros([4, 2]);
        assert_eq!(
            multiply(&c1, &c2),
            Err(Error::ShapeMismatch {
                op: "multiply",
                expected: [2, 2],
                actual: [4, 2]
            })
        );
        assert!(matches!(
            multiply(&c1, &Arr2::zeros([1, 2])),
            Err(Error::OddLeadingDimension { rows: 1, .. })
        ));
    }

    #[test]
    fn test_empty_entries() {
        setup();
        let a = Arr2::<f64>::zeros([0, 3]);
        let b = mul_real(&a, &Arr2::zeros([0, 3])).unwrap();
        assert_eq!(b.shape(), [0, 3]);
    }
}
