use crate::{kernel, validate, Error, Result, Scalar};
use array::{Arr2, ShapeError};
use num_complex::Complex;

/// Number of storage rows holding `n_entries` interleaved pairs.
#[track_caller]
fn storage_rows(n_entries: usize) -> usize {
    match n_entries.checked_mul(2) {
        Some(rows) => rows,
        None => panic!("{} entries overflow interleaved storage", n_entries),
    }
}

/// A logical complex array of shape `(n, m)` stored as interleaved real
/// storage of shape `(2n, m)`.
///
/// The pairing of rows into (real, imaginary) lanes is checked once when the
/// container is built, so the unary operations can't fail. Operations taking
/// a second operand still check that operand's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Interleaved<T> {
    storage: Arr2<T>,
}

impl<T: Scalar> Interleaved<T> {
    /// Wraps interleaved storage.
    ///
    /// # Errors
    ///
    /// [`Error::OddLeadingDimension`] if `storage` has an odd number of rows.
    pub fn new(storage: Arr2<T>) -> Result<Self> {
        validate::interleaved("Interleaved::new", storage.shape())?;
        Ok(Self { storage })
    }

    /// Wraps a column-major buffer of `2 * n_entries * n_batches` values laid
    /// out as `[re, im, re, im, ...]` column after column.
    ///
    /// # Errors
    ///
    /// [`Error::Array`] if the buffer length doesn't match, or if the storage
    /// shape overflows `usize`.
    pub fn from_vec(n_entries: usize, n_batches: usize, vec: Vec<T>) -> Result<Self> {
        let rows = n_entries.checked_mul(2).ok_or(ShapeError::TooLarge {
            shape: [n_entries, n_batches],
        })?;
        let storage = Arr2::from_vec([rows, n_batches], vec)?;
        Ok(Self { storage })
    }

    /// Creates `n_entries * n_batches` complex zeros.
    ///
    /// # Panics
    ///
    /// If the storage shape overflows `usize`.
    #[track_caller]
    pub fn zeros(n_entries: usize, n_batches: usize) -> Self {
        Self {
            storage: Arr2::zeros([storage_rows(n_entries), n_batches]),
        }
    }

    /// Interleaves two split arrays holding the real and the imaginary parts.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `re` and `im` differ in shape.
    pub fn from_parts(re: &Arr2<T>, im: &Arr2<T>) -> Result<Self> {
        validate::same("Interleaved::from_parts", re.shape(), im.shape())?;
        let [n, m] = re.shape();
        let storage = Arr2::from_fn([storage_rows(n), m], |i, j| {
            if i % 2 == 0 {
                re[[i / 2, j]]
            } else {
                im[[i / 2, j]]
            }
        });
        Ok(Self { storage })
    }

    /// Interleaves an array of native complex values.
    pub fn from_complex(c: &Arr2<Complex<T>>) -> Self {
        let [n, m] = c.shape();
        let storage = Arr2::from_fn([storage_rows(n), m], |i, j| {
            let z = c[[i / 2, j]];
            if i % 2 == 0 {
                z.re
            } else {
                z.im
            }
        });
        Self { storage }
    }

    /// Converts back to an array of native complex values.
    pub fn to_complex(&self) -> Arr2<Complex<T>> {
        Arr2::from_fn(self.shape(), |k, j| self.entry(k, j))
    }

    /// Logical shape `(n, m)`.
    pub fn shape(&self) -> [usize; 2] { [self.n_entries(), self.n_batches()] }

    /// Number of complex entries per column.
    pub fn n_entries(&self) -> usize { self.storage.nrows() / 2 }

    /// Number of columns.
    pub fn n_batches(&self) -> usize { self.storage.ncols() }

    /// The interleaved storage, of shape `(2n, m)`.
    pub fn storage(&self) -> &Arr2<T> { &self.storage }

    /// Unwraps the interleaved storage.
    pub fn into_storage(self) -> Arr2<T> { self.storage }

    /// Returns logical entry `(k, j)`.
    #[track_caller]
    pub fn entry(&self, k: usize, j: usize) -> Complex<T> {
        Complex::new(self.storage[[2 * k, j]], self.storage[[2 * k + 1, j]])
    }

    /// Overwrites logical entry `(k, j)`.
    #[track_caller]
    pub fn set_entry(&mut self, k: usize, j: usize, z: Complex<T>) {
        self.storage[[2 * k, j]] = z.re;
        self.storage[[2 * k + 1, j]] = z.im;
    }

    /// Complex conjugate.
    pub fn conj(&self) -> Self {
        Self {
            storage: kernel::conjugate(&self.storage),
        }
    }

    /// Modulus of every entry, shape `(n, m)`.
    pub fn norm(&self) -> Arr2<T> { kernel::magnitude(&self.storage) }

    /// Real parts, shape `(n, m)`.
    pub fn re(&self) -> Arr2<T> { kernel::extract(&self.storage, kernel::RE) }

    /// Imaginary parts, shape `(n, m)`.
    pub fn im(&self) -> Arr2<T> { kernel::extract(&self.storage, kernel::IM) }

    /// Multiplies by a native complex array of shape `(n, m)`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `a_c` isn't of shape `(n, m)`.
    pub fn mul_complex(&self, a_c: &Arr2<Complex<T>>) -> Result<Self> {
        validate::paired("Interleaved::mul_complex", self.storage.shape(), a_c.shape())?;
        Ok(Self {
            storage: kernel::mul_complex(&self.storage, a_c),
        })
    }

    /// Multiplies by the purely imaginary array `i * a_c`, `a_c` of shape
    /// `(n, m)`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `a_c` isn't of shape `(n, m)`.
    pub fn mul_imag(&self, a_c: &Arr2<T>) -> Result<Self> {
        validate::paired("Interleaved::mul_imag", self.storage.shape(), a_c.shape())?;
        Ok(Self {
            storage: kernel::mul_imag(&self.storage, a_c),
        })
    }

    /// Multiplies every entry by the purely imaginary scalar `i * s`.
    pub fn mul_imag_scalar(&self, s: T) -> Self {
        Self {
            storage: kernel::mul_imag_scalar(&self.storage, s),
        }
    }

    /// Multiplies by the purely real array `a_c` of shape `(n, m)`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `a_c` isn't of shape `(n, m)`.
    pub fn mul_real(&self, a_c: &Arr2<T>) -> Result<Self> {
        validate::paired("Interleaved::mul_real", self.storage.shape(), a_c.shape())?;
        Ok(Self {
            storage: kernel::mul_real(&self.storage, a_c),
        })
    }

    /// Entry-wise complex product with another interleaved array.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the two arrays differ in shape.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate::same("Interleaved::mul", self.storage.shape(), other.storage.shape())?;
        Ok(Self {
            storage: kernel::multiply(&self.storage, &other.storage),
        })
    }
}

impl<T: Scalar> TryFrom<Arr2<T>> for Interleaved<T> {
    type Error = Error;

    fn try_from(storage: Arr2<T>) -> Result<Self> { Self::new(storage) }
}

impl<T> From<Interleaved<T>> for Arr2<T> {
    fn from(c: Interleaved<T>) -> Self { c.storage }
}

impl<T> AsRef<Arr2<T>> for Interleaved<T> {
    fn as_ref(&self) -> &Arr2<T> { &self.storage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interleaved_rejects_odd_rows() {
        let _ = env_logger::builder().is_test(true).try_init();
        let err = Interleaved::new(Arr2::<f64>::zeros([3, 2])).unwrap_err();
        assert_eq!(
            err,
            Error::OddLeadingDimension {
                op: "Interleaved::new",
                rows: 3
            }
        );
        assert!(Interleaved::try_from(Arr2::<f32>::zeros([1, 1])).is_err());
    }

    #[test]
    fn test_interleaved_layout() {
        let re = Arr2::from_rows(&[[1.0, 5.0], [3.0, 7.0]]);
        let im = Arr2::from_rows(&[[2.0, 6.0], [4.0, 8.0]]);
        let c = Interleaved::from_parts(&re, &im).unwrap();
        assert_eq!(c.shape(), [2, 2]);
        assert_eq!(c.storage().shape(), [4, 2]);
        assert_eq!(c.storage().as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(c.entry(1, 1), Complex::new(7.0, 8.0));
        assert_eq!(c.re(), re);
        assert_eq!(c.im(), im);

        let back = Interleaved::from_complex(&c.to_complex());
        assert_eq!(back, c);
        assert!(Interleaved::from_parts(&re, &Arr2::zeros([2, 1])).is_err());
    }

    #[test]
    fn test_from_vec() {
        let c = Interleaved::from_vec(2, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(c.entry(1, 0), Complex::new(3.0, 4.0));
        assert!(matches!(
            Interleaved::from_vec(2, 1, vec![1.0, 2.0, 3.0]),
            Err(Error::Array(_))
        ));
    }

    #[test]
    fn test_from_vec_too_large() {
        assert_eq!(
            Interleaved::<f64>::from_vec(1 << 63, 1, vec![]),
            Err(Error::Array(ShapeError::TooLarge { shape: [1 << 63, 1] }))
        );
        assert_eq!(
            Interleaved::<f64>::from_vec(1 << 62, 4, vec![]),
            Err(Error::Array(ShapeError::TooLarge { shape: [1 << 63, 4] }))
        );
    }

    #[test]
    fn test_set_entry() {
        let mut c = Interleaved::<f64>::zeros(3, 2);
        c.set_entry(2, 1, Complex::new(-1.0, 0.5));
        assert_eq!(c.storage()[[4, 1]], -1.0);
        assert_eq!(c.storage()[[5, 1]], 0.5);
        assert_eq!(c.into_storage().as_slice().iter().filter(|x| **x != 0.0).count(), 2);
    }

    #[test]
    fn test_interleaved_arithmetic() {
        let c = Interleaved::from_complex(&Arr2::from_rows(&[
            [Complex::new(1.0, 2.0), Complex::new(0.0, 1.0)],
            [Complex::new(3.0, -4.0), Complex::new(-2.0, 0.0)],
        ]));

        assert_eq!(c.conj().entry(0, 0), Complex::new(1.0, -2.0));
        assert_relative_eq!(c.norm()[[1, 0]], 5.0);

        let d = c.mul(&c.conj()).unwrap();
        assert_eq!(d.entry(0, 0), Complex::new(5.0, 0.0));
        assert_eq!(d.entry(1, 0), Complex::new(25.0, 0.0));

        let i = c.mul_imag_scalar(1.0);
        assert_eq!(i.entry(0, 1), Complex::new(-1.0, 0.0));

        let half = Arr2::splat(0.5, [2, 2]);
        assert_eq!(c.mul_real(&half).unwrap().entry(1, 0), Complex::new(1.5, -2.0));
        assert_eq!(c.mul_imag(&half).unwrap().entry(1, 0), Complex::new(2.0, 1.5));

        let z = Arr2::splat(Complex::new(0.0, 1.0), [2, 2]);
        assert_eq!(c.mul_complex(&z).unwrap(), i);

        assert!(c.mul_real(&Arr2::zeros([4, 2])).is_err());
        assert!(c.mul(&Interleaved::zeros(2, 1)).is_err());
    }
}
