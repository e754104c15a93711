//! Shape and stride arithmetic.

use crate::array::mem::MemLayout;

/// Computes the number of elements in an array with the given shape, or
/// `None` if it overflows `usize`.
pub const fn checked_n_elems(shape: &[usize]) -> Option<usize> {
    let mut n_elems: usize = 1;
    let mut i = 0;
    while i < shape.len() {
        n_elems = match n_elems.checked_mul(shape[i]) {
            Some(n) => n,
            None => return None,
        };
        i += 1;
    }
    Some(n_elems)
}

/// Computes the strides of an array with the given shape and layout.
///
/// A stride is the number of elements to skip to get to the next element along
/// the corresponding dimension.
pub const fn compute_strides(shape: &[usize], strides: &mut [usize], layout: MemLayout) {
    let n = shape.len();
    let mut i = 0;
    let mut stride = 1;
    match layout {
        MemLayout::RowMajor => {
            while i < n {
                strides[n - i - 1] = stride;
                stride *= shape[n - i - 1];
                i += 1;
            }
        }
        MemLayout::ColMajor => {
            while i < n {
                strides[i] = stride;
                stride *= shape[i];
                i += 1;
            }
        }
    }
}

/// Flat offset of the element at `index` given the strides.
#[inline]
pub const fn compute_offset(index: &[usize], strides: &[usize]) -> usize {
    let mut offset = 0;
    let mut i = 0;
    while i < index.len() {
        offset += index[i] * strides[i];
        i += 1;
    }
    offset
}
