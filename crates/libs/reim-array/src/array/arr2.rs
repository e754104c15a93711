use crate::{
    array::{
        mem::{print_slice, MemLayout},
        shape::{checked_n_elems, compute_offset, compute_strides},
    },
    ShapeError,
};
use num_traits::{One, Zero};
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Index, IndexMut},
    slice::{ChunksExact, ChunksExactMut, Iter},
};

/// A two-dimensional array on the heap, stored column by column.
///
/// Element `(i, j)` lives at flat offset `i + j * nrows`: the first dimension
/// varies the fastest and every column is a contiguous slice of the buffer.
#[derive(Clone, PartialEq)]
pub struct Arr2<T> {
    /// Flat column-major buffer.
    data: Vec<T>,
    /// Number of rows and columns.
    shape: [usize; 2],
    /// Number of elements to skip to get to the next element along each
    /// dimension; always `[1, nrows]`.
    strides: [usize; 2],
}

/// Number of elements of `shape`, panicking if it overflows `usize`.
#[track_caller]
fn n_elems(shape: [usize; 2]) -> usize {
    match checked_n_elems(&shape) {
        Some(n) => n,
        None => panic!("shape {:?} overflows usize", shape),
    }
}

/// Number of elements of `shape` for a buffer of length `len`.
fn fitting_n_elems(shape: [usize; 2], len: usize) -> Result<usize, ShapeError> {
    match checked_n_elems(&shape) {
        None => Err(ShapeError::TooLarge { shape }),
        Some(n) if n != len => Err(ShapeError::LengthMismatch { shape, len }),
        Some(n) => Ok(n),
    }
}

impl<T> Arr2<T> {
    fn from_raw(shape: [usize; 2], data: Vec<T>) -> Self {
        debug_assert_eq!(
            Some(data.len()),
            checked_n_elems(&shape),
            "data size doesn't match shape"
        );
        let mut strides = [0usize; 2];
        compute_strides(&shape, &mut strides, MemLayout::ColMajor);
        Self {
            data,
            shape,
            strides,
        }
    }

    /// Creates an array from a column-major buffer.
    pub fn from_vec(shape: [usize; 2], vec: Vec<T>) -> Result<Self, ShapeError> {
        fitting_n_elems(shape, vec.len())?;
        Ok(Self::from_raw(shape, vec))
    }

    /// Creates an array from a buffer ordered according to `layout`.
    ///
    /// The array is always stored column-major; a row-major buffer is
    /// reordered on the way in.
    pub fn from_vec_with_layout(
        shape: [usize; 2],
        vec: Vec<T>,
        layout: MemLayout,
    ) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        match layout {
            MemLayout::ColMajor => Self::from_vec(shape, vec),
            MemLayout::RowMajor => {
                fitting_n_elems(shape, vec.len())?;
                let mut src_strides = [0usize; 2];
                compute_strides(&shape, &mut src_strides, MemLayout::RowMajor);
                Ok(Self::from_fn(shape, |i, j| {
                    vec[compute_offset(&[i, j], &src_strides)].clone()
                }))
            }
        }
    }

    /// Creates an array from row literals.
    ///
    /// ```
    /// # use reim_array::Arr2;
    /// let a = Arr2::from_rows(&[[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(a.shape(), [2, 3]);
    /// assert_eq!(a.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Self
    where
        T: Clone,
    {
        Self::from_fn([rows.len(), C], |i, j| rows[i][j].clone())
    }

    /// Creates an array by evaluating `f(i, j)` for every element, column by
    /// column.
    ///
    /// # Panics
    ///
    /// If the number of elements of `shape` overflows `usize`.
    #[track_caller]
    pub fn from_fn<F>(shape: [usize; 2], mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let [rows, cols] = shape;
        let mut data = Vec::with_capacity(n_elems(shape));
        for j in 0..cols {
            for i in 0..rows {
                data.push(f(i, j));
            }
        }
        Self::from_raw(shape, data)
    }

    /// Creates a new array with all elements set to zero.
    pub fn zeros(shape: [usize; 2]) -> Self
    where
        T: Zero + Clone,
    {
        Self::splat(T::zero(), shape)
    }

    /// Creates a new array with all elements set to one.
    pub fn ones(shape: [usize; 2]) -> Self
    where
        T: One + Clone,
    {
        Self::splat(T::one(), shape)
    }

    /// Creates a new array with all elements set to the given value.
    ///
    /// # Panics
    ///
    /// If the number of elements of `shape` overflows `usize`.
    #[track_caller]
    pub fn splat(value: T, shape: [usize; 2]) -> Self
    where
        T: Clone,
    {
        Self::from_raw(shape, vec![value; n_elems(shape)])
    }

    /// Returns the shape of the array.
    #[inline]
    pub fn shape(&self) -> [usize; 2] { self.shape }

    /// Returns the strides of the array.
    #[inline]
    pub fn strides(&self) -> [usize; 2] { self.strides }

    /// Returns the layout of the array.
    #[inline]
    pub fn order(&self) -> MemLayout { MemLayout::ColMajor }

    /// Returns the number of rows (the fastest varying dimension).
    #[inline]
    pub fn nrows(&self) -> usize { self.shape[0] }

    /// Returns the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize { self.shape[1] }

    /// Returns the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize { self.data.len() }

    /// Returns true if the array holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Returns the column-major buffer.
    pub fn as_slice(&self) -> &[T] { &self.data }

    /// Returns the mutable column-major buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.data }

    /// Consumes the array and returns its column-major buffer.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Returns the element at `(i, j)`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.shape[0] && j < self.shape[1] {
            self.data.get(compute_offset(&[i, j], &self.strides))
        } else {
            None
        }
    }

    /// Returns column `j` as a contiguous slice.
    #[track_caller]
    pub fn column(&self, j: usize) -> &[T] {
        assert!(j < self.ncols(), "column {} out of bounds for shape {:?}", j, self.shape);
        let rows = self.nrows();
        &self.data[j * rows..(j + 1) * rows]
    }

    /// Returns column `j` as a contiguous mutable slice.
    #[track_caller]
    pub fn column_mut(&mut self, j: usize) -> &mut [T] {
        assert!(j < self.ncols(), "column {} out of bounds for shape {:?}", j, self.shape);
        let rows = self.nrows();
        &mut self.data[j * rows..(j + 1) * rows]
    }

    /// Iterates over the columns.
    ///
    /// An array without rows yields no column.
    pub fn columns(&self) -> ChunksExact<'_, T> { self.data.chunks_exact(self.nrows().max(1)) }

    /// Iterates mutably over the columns.
    ///
    /// An array without rows yields no column.
    pub fn columns_mut(&mut self) -> ChunksExactMut<'_, T> {
        let rows = self.nrows().max(1);
        self.data.chunks_exact_mut(rows)
    }

    /// Iterates over the elements in memory order.
    pub fn iter(&self) -> Iter<'_, T> { self.data.iter() }

    /// Creates a new array of the same shape by applying `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Arr2<U>
    where
        F: FnMut(&T) -> U,
    {
        Arr2::from_raw(self.shape, self.data.iter().map(f).collect())
    }
}

impl<T> Index<[usize; 2]> for Arr2<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: [usize; 2]) -> &Self::Output {
        assert!(
            index[0] < self.shape[0] && index[1] < self.shape[1],
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape
        );
        &self.data[compute_offset(&index, &self.strides)]
    }
}

impl<T> IndexMut<[usize; 2]> for Arr2<T> {
    #[track_caller]
    fn index_mut(&mut self, index: [usize; 2]) -> &mut Self::Output {
        assert!(
            index[0] < self.shape[0] && index[1] < self.shape[1],
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape
        );
        &mut self.data[compute_offset(&index, &self.strides)]
    }
}

impl<T: Debug> Debug for Arr2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arr2")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Display> Display for Arr2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for i in 0..self.nrows() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let row: Vec<&T> = (0..self.ncols()).map(|j| &self[[i, j]]).collect();
            print_slice(f, row.as_slice())?;
        }
        write!(f, "]")
    }
}

impl<T> AsRef<[T]> for Arr2<T> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}
