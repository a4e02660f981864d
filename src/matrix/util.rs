use core::fmt;

use crate::matrix::aliases::{ColumnVector, RowVector};
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use smallmat::Matrix3;
    /// let m = Matrix3::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(m, Matrix3::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = [[0.0; C]; R];
        for i in 0..R {
            for j in 0..C {
                data[i][j] = f(i, j);
            }
        }
        Self { data }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use smallmat::Matrix2x2;
    /// let m = Matrix2x2::new([[1.0, 4.0], [9.0, 16.0]]);
    /// let r = m.map(f64::sqrt);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut out = *self;
        for i in 0..R {
            for j in 0..C {
                out.data[i][j] = f(self.data[i][j]);
            }
        }
        out
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        let mut s = 0.0;
        for i in 0..R {
            for j in 0..C {
                s += self.data[i][j];
            }
        }
        s
    }
}

// ── Row / column decomposition ──────────────────────────────────────

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Copy row `i` out as a 1×C row vector, columns in order.
    ///
    /// Pure projection; the source is untouched. Panics if `i >= R`.
    ///
    /// ```
    /// use smallmat::Matrix3x2;
    /// let m = Matrix3x2::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    /// let r = m.row(1);
    /// assert_eq!(r[(0, 0)], 3.0);
    /// assert_eq!(r[(0, 1)], 4.0);
    /// ```
    pub fn row(&self, i: usize) -> RowVector<C> {
        Matrix { data: [self.data[i]] }
    }

    /// Copy column `j` out as an R×1 column vector, rows in order.
    ///
    /// Pure projection; the source is untouched. Panics if `j >= C`.
    ///
    /// ```
    /// use smallmat::Matrix3x2;
    /// let m = Matrix3x2::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    /// let c = m.col(1);
    /// assert_eq!(c[(0, 0)], 2.0);
    /// assert_eq!(c[(2, 0)], 6.0);
    /// ```
    pub fn col(&self, j: usize) -> ColumnVector<R> {
        let mut v = ColumnVector::<R>::ZERO;
        for i in 0..R {
            v.data[i][0] = self.data[i][j];
        }
        v
    }

    /// Overwrite row `i` from a row vector.
    pub fn set_row(&mut self, i: usize, v: &RowVector<C>) {
        self.data[i] = v.data[0];
    }

    /// Overwrite column `j` from a column vector.
    pub fn set_col(&mut self, j: usize, v: &ColumnVector<R>) {
        for i in 0..R {
            self.data[i][j] = v.data[i][0];
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Grid rendering: the type name, then one `{| a | b | ... |}` group per
/// row with elements formatted to two decimals, groups separated by single
/// spaces.
///
/// ```
/// use smallmat::Matrix2x2;
/// let m = Matrix2x2::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.to_string(), "Matrix2x2 {| 1.00 | 2.00 |} {| 3.00 | 4.00 |}");
/// ```
impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{}x{}", R, C)?;
        for i in 0..R {
            write!(f, " {{|")?;
            for j in 0..C {
                write!(f, " {:.2} |", self.data[i][j])?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}
