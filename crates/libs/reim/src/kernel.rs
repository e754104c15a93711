//! Column kernels.
//!
//! One column of interleaved storage is laid out as
//! `[re_0, im_0, re_1, im_1, ...]`. The drivers walk the batch dimension in
//! the outer loop and hand every column to a lane routine, whose inner loop
//! runs over the logical index with unit stride. Shapes are assumed valid.

use crate::Scalar;
use array::Arr2;
use cfg_if::cfg_if;
use num_complex::Complex;

/// Calls `f(j, column)` for every column `j` of `res`.
///
/// With the `parallel` feature the columns are distributed over the rayon
/// thread pool; each column is still computed by the same sequential loop.
fn for_each_column<T, F>(res: &mut Arr2<T>, f: F)
where
    T: Scalar,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if res.nrows() == 0 {
        return;
    }
    cfg_if! {
        if #[cfg(feature = "parallel")] {
            use rayon::prelude::*;
            let rows = res.nrows();
            res.as_mut_slice()
                .par_chunks_mut(rows)
                .enumerate()
                .for_each(|(j, col)| f(j, col));
        } else {
            for (j, col) in res.columns_mut().enumerate() {
                f(j, col);
            }
        }
    }
}

pub(crate) fn mul_complex<T: Scalar>(a: &Arr2<T>, a_c: &Arr2<Complex<T>>) -> Arr2<T> {
    let mut res = Arr2::zeros(a.shape());
    for_each_column(&mut res, |j, col| {
        mul_complex_lanes(col, a.column(j), a_c.column(j))
    });
    res
}

pub(crate) fn mul_imag<T: Scalar>(a: &Arr2<T>, a_c: &Arr2<T>) -> Arr2<T> {
    let mut res = Arr2::zeros(a.shape());
    for_each_column(&mut res, |j, col| mul_imag_lanes(col, a.column(j), a_c.column(j)));
    res
}

pub(crate) fn mul_imag_scalar<T: Scalar>(a: &Arr2<T>, s: T) -> Arr2<T> {
    let mut res = Arr2::zeros(a.shape());
    for_each_column(&mut res, |j, col| mul_imag_scalar_lanes(col, a.column(j), s));
    res
}

pub(crate) fn mul_real<T: Scalar>(a: &Arr2<T>, a_c: &Arr2<T>) -> Arr2<T> {
    let mut res = Arr2::zeros(a.shape());
    for_each_column(&mut res, |j, col| mul_real_lanes(col, a.column(j), a_c.column(j)));
    res
}

pub(crate) fn multiply<T: Scalar>(c1: &Arr2<T>, c2: &Arr2<T>) -> Arr2<T> {
    let mut res = Arr2::zeros(c1.shape());
    for_each_column(&mut res, |j, col| mul_lanes(col, c1.column(j), c2.column(j)));
    res
}

pub(crate) fn conjugate<T: Scalar>(c: &Arr2<T>) -> Arr2<T> {
    let mut res = Arr2::zeros(c.shape());
    for_each_column(&mut res, |j, col| conj_lanes(col, c.column(j)));
    res
}

pub(crate) fn magnitude<T: Scalar>(c: &Arr2<T>) -> Arr2<T> {
    let mut res = Arr2::zeros([c.nrows() / 2, c.ncols()]);
    for_each_column(&mut res, |j, col| norm_lanes(col, c.column(j)));
    res
}

/// Real lane offset inside a (real, imaginary) pair.
pub(crate) const RE: usize = 0;
/// Imaginary lane offset inside a (real, imaginary) pair.
pub(crate) const IM: usize = 1;

/// Copies lane `lane` (`RE` or `IM`) of every pair into a split array.
pub(crate) fn extract<T: Scalar>(c: &Arr2<T>, lane: usize) -> Arr2<T> {
    let mut res = Arr2::zeros([c.nrows() / 2, c.ncols()]);
    for_each_column(&mut res, |j, col| take_lanes(col, c.column(j), lane));
    res
}

fn mul_complex_lanes<T: Scalar>(res: &mut [T], a: &[T], b: &[Complex<T>]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
        assert_eq!(b.len() << 1, res.len());
    }

    for k in 0..b.len() {
        let ar: T = a[2 * k];
        let ai: T = a[2 * k + 1];
        let br: T = b[k].re;
        let bi: T = b[k].im;
        res[2 * k] = ar * br - ai * bi;
        res[2 * k + 1] = ar * bi + ai * br;
    }
}

fn mul_imag_lanes<T: Scalar>(res: &mut [T], a: &[T], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
        assert_eq!(b.len() << 1, res.len());
    }

    for k in 0..b.len() {
        let ar: T = a[2 * k];
        let ai: T = a[2 * k + 1];
        res[2 * k] = -(ai * b[k]);
        res[2 * k + 1] = ar * b[k];
    }
}

fn mul_imag_scalar_lanes<T: Scalar>(res: &mut [T], a: &[T], s: T) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
    }

    for k in 0..res.len() >> 1 {
        let ar: T = a[2 * k];
        let ai: T = a[2 * k + 1];
        res[2 * k] = -(ai * s);
        res[2 * k + 1] = ar * s;
    }
}

fn mul_real_lanes<T: Scalar>(res: &mut [T], a: &[T], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
        assert_eq!(b.len() << 1, res.len());
    }

    for k in 0..b.len() {
        res[2 * k] = a[2 * k] * b[k];
        res[2 * k + 1] = a[2 * k + 1] * b[k];
    }
}

fn mul_lanes<T: Scalar>(res: &mut [T], a: &[T], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
        assert_eq!(b.len(), res.len());
    }

    for k in 0..res.len() >> 1 {
        let ar: T = a[2 * k];
        let ai: T = a[2 * k + 1];
        let br: T = b[2 * k];
        let bi: T = b[2 * k + 1];
        res[2 * k] = ar * br - ai * bi;
        res[2 * k + 1] = ar * bi + ai * br;
    }
}

fn conj_lanes<T: Scalar>(res: &mut [T], a: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
    }

    for k in 0..res.len() >> 1 {
        res[2 * k] = a[2 * k];
        res[2 * k + 1] = -a[2 * k + 1];
    }
}

fn norm_lanes<T: Scalar>(res: &mut [T], a: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len() << 1);
    }

    for k in 0..res.len() {
        let re: T = a[2 * k];
        let im: T = a[2 * k + 1];
        res[k] = (re * re + im * im).sqrt();
    }
}

fn take_lanes<T: Scalar>(res: &mut [T], a: &[T], lane: usize) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len() << 1);
        assert!(lane == RE || lane == IM);
    }

    for k in 0..res.len() {
        res[k] = a[2 * k + lane];
    }
}
