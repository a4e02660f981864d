pub mod aliases;
mod cmp;
mod ops;
mod square;
mod util;

use core::ops::{Index, IndexMut};

/// Fixed-size matrix with `R` rows and `C` columns of `f64` elements.
///
/// Storage is row-major: `data[row][col]`, so the flat element order used by
/// [`as_slice`](Matrix::as_slice) and by hashing reads row 0 left to right,
/// then row 1, and so on. Stack-allocated, no-std compatible, copied by value
/// on every assignment — two matrix bindings never alias.
///
/// Equality (`==`, `!=`) is element-wise within [`EPSILON`](Matrix::EPSILON).
/// Hashing is over raw element bit patterns; matrices that compare equal
/// through the tolerance hash identically only when their elements are
/// bit-identical. Exact-value caches rely on the bit hashing, so the hash is
/// deliberately not widened to the tolerance.
///
/// # Examples
///
/// ```
/// use smallmat::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let z: Matrix<3, 2> = Matrix::zeros();
/// assert_eq!(z, Matrix::ZERO);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matrix<const R: usize, const C: usize> {
    pub(crate) data: [[f64; C]; R],
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Tolerance used by `==` / `!=`, shared by every dimension.
    ///
    /// Two matrices are equal when every pair of corresponding elements
    /// differs by at most this amount in absolute value.
    pub const EPSILON: f64 = 1e-7;

    /// The all-zero matrix of this dimension.
    pub const ZERO: Self = Self {
        data: [[0.0; C]; R],
    };

    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` — R arrays of C elements each,
    /// read in the order the matrix is written on paper.
    ///
    /// ```
    /// use smallmat::Matrix4x2;
    ///
    /// let m = Matrix4x2::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(3, 1)], 8.0);
    /// ```
    #[inline]
    pub const fn new(rows: [[f64; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Create a matrix with every element set to `value`.
    ///
    /// ```
    /// use smallmat::Matrix2x3;
    ///
    /// let m = Matrix2x3::fill(1.5);
    /// assert_eq!(m[(1, 2)], 1.5);
    /// ```
    #[inline]
    pub const fn fill(value: f64) -> Self {
        Self {
            data: [[value; C]; R],
        }
    }

    /// Create a matrix filled with zeros. Same value as [`ZERO`](Self::ZERO).
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Read the element at `(row, col)`, checking both indices.
    ///
    /// ```
    /// use smallmat::{Axis, Matrix2x2};
    ///
    /// let m = Matrix2x2::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.get(1, 0), Ok(3.0));
    ///
    /// let err = m.get(1, 5).unwrap_err();
    /// assert_eq!(err.axis, Axis::Column);
    /// assert_eq!(err.index, 5);
    /// assert_eq!(err.bound, 2);
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<f64, OutOfRange> {
        Self::check_bounds(row, col)?;
        Ok(self.data[row][col])
    }

    /// Write the element at `(row, col)`, checking both indices.
    ///
    /// On error the matrix is left unchanged.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), OutOfRange> {
        Self::check_bounds(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), OutOfRange> {
        if row >= R {
            return Err(OutOfRange {
                axis: Axis::Row,
                index: row,
                bound: R,
            });
        }
        if col >= C {
            return Err(OutOfRange {
                axis: Axis::Column,
                index: col,
                bound: C,
            });
        }
        Ok(())
    }

    /// View the entire matrix as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.data.as_flattened_mut()
    }
}

impl<const N: usize> Matrix<N, N> {
    /// Create an identity matrix (square dimensions only).
    ///
    /// ```
    /// use smallmat::Matrix3;
    ///
    /// let id = Matrix3::eye();
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn eye() -> Self {
        let mut m = Self::ZERO;
        for i in 0..N {
            m.data[i][i] = 1.0;
        }
        m
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::ZERO
    }
}

// Index by (row, col) tuple; panicking operator form of get/set.
impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row][col]
    }
}

/// Which index of an element access was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The row index.
    Row,
    /// The column index.
    Column,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Element access with a row or column index outside the matrix.
///
/// Returned by [`Matrix::get`] and [`Matrix::set`]. Carries the offending
/// axis, the supplied index, and the exclusive upper bound for that axis.
///
/// # Example
///
/// ```
/// use smallmat::{Axis, Matrix2x3};
///
/// let m = Matrix2x3::ZERO;
/// let err = m.get(4, 0).unwrap_err();
/// assert_eq!(err.axis, Axis::Row);
/// assert_eq!(format!("{}", err), "row index 4 out of range (valid range 0..2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// Axis whose index was invalid.
    pub axis: Axis,
    /// The supplied index.
    pub index: usize,
    /// Exclusive upper bound for the axis (`R` for rows, `C` for columns).
    pub bound: usize,
}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} index {} out of range (valid range 0..{})",
            self.axis, self.index, self.bound
        )
    }
}

pub use aliases::*;
