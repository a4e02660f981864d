use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..R {
            for j in 0..C {
                out.data[i][j] += rhs.data[i][j];
            }
        }
        out
    }
}

impl<const R: usize, const C: usize> AddAssign for Matrix<R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] += rhs.data[i][j];
            }
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..R {
            for j in 0..C {
                out.data[i][j] -= rhs.data[i][j];
            }
        }
        out
    }
}

impl<const R: usize, const C: usize> SubAssign for Matrix<R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] -= rhs.data[i][j];
            }
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        for i in 0..R {
            for j in 0..C {
                out.data[i][j] = -self.data[i][j];
            }
        }
        out
    }
}

impl<const R: usize, const C: usize> Neg for &Matrix<R, C> {
    type Output = Matrix<R, C>;

    fn neg(self) -> Matrix<R, C> {
        (*self).neg()
    }
}

impl<const R: usize, const C: usize> AddAssign<&Matrix<R, C>> for Matrix<R, C> {
    fn add_assign(&mut self, rhs: &Matrix<R, C>) {
        self.add_assign(*rhs);
    }
}

impl<const R: usize, const C: usize> SubAssign<&Matrix<R, C>> for Matrix<R, C> {
    fn sub_assign(&mut self, rhs: &Matrix<R, C>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: (R×C) * (C×C2) → (R×C2) ─────────────────

impl<const R: usize, const C: usize, const C2: usize> Mul<Matrix<C, C2>> for Matrix<R, C> {
    type Output = Matrix<R, C2>;

    /// Each output element is the dot product of a left row and a right
    /// column, summed over k = 0..C in increasing order so results are
    /// bit-reproducible across platforms.
    fn mul(self, rhs: Matrix<C, C2>) -> Matrix<R, C2> {
        let mut out = Matrix::<R, C2>::ZERO;
        for i in 0..R {
            for j in 0..C2 {
                let mut sum = 0.0;
                for k in 0..C {
                    sum += self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

// ── Scalar multiplication: matrix * scalar and scalar * matrix ──────

impl<const R: usize, const C: usize> Mul<f64> for Matrix<R, C> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        let mut out = self;
        for i in 0..R {
            for j in 0..C {
                out.data[i][j] *= rhs;
            }
        }
        out
    }
}

impl<const R: usize, const C: usize> Mul<Matrix<R, C>> for f64 {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: Matrix<R, C>) -> Matrix<R, C> {
        rhs * self
    }
}

impl<const R: usize, const C: usize> Mul<&Matrix<R, C>> for f64 {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: &Matrix<R, C>) -> Matrix<R, C> {
        *rhs * self
    }
}

impl<const R: usize, const C: usize> MulAssign<f64> for Matrix<R, C> {
    fn mul_assign(&mut self, rhs: f64) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] *= rhs;
            }
        }
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<const R: usize, const C: usize> $Op<Matrix<R, C>> for &Matrix<R, C> {
            type Output = Matrix<R, C>;
            fn $method(self, rhs: Matrix<R, C>) -> Matrix<R, C> {
                (*self).$method(rhs)
            }
        }

        impl<const R: usize, const C: usize> $Op<&Matrix<R, C>> for Matrix<R, C> {
            type Output = Matrix<R, C>;
            fn $method(self, rhs: &Matrix<R, C>) -> Matrix<R, C> {
                self.$method(*rhs)
            }
        }

        impl<const R: usize, const C: usize> $Op<&Matrix<R, C>> for &Matrix<R, C> {
            type Output = Matrix<R, C>;
            fn $method(self, rhs: &Matrix<R, C>) -> Matrix<R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<const R: usize, const C: usize, const C2: usize> Mul<Matrix<C, C2>> for &Matrix<R, C> {
    type Output = Matrix<R, C2>;
    fn mul(self, rhs: Matrix<C, C2>) -> Matrix<R, C2> {
        (*self).mul(rhs)
    }
}

impl<const R: usize, const C: usize, const C2: usize> Mul<&Matrix<C, C2>> for Matrix<R, C> {
    type Output = Matrix<R, C2>;
    fn mul(self, rhs: &Matrix<C, C2>) -> Matrix<R, C2> {
        self.mul(*rhs)
    }
}

impl<const R: usize, const C: usize, const C2: usize> Mul<&Matrix<C, C2>> for &Matrix<R, C> {
    type Output = Matrix<R, C2>;
    fn mul(self, rhs: &Matrix<C, C2>) -> Matrix<R, C2> {
        (*self).mul(*rhs)
    }
}

impl<const R: usize, const C: usize> Mul<f64> for &Matrix<R, C> {
    type Output = Matrix<R, C>;
    fn mul(self, rhs: f64) -> Matrix<R, C> {
        (*self).mul(rhs)
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Transpose: (R×C) → (C×R).
    ///
    /// Pure projection; transposing twice returns a matrix equal to the
    /// original.
    ///
    /// ```
    /// use smallmat::Matrix2x3;
    ///
    /// let m = Matrix2x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = m.transpose();
    /// assert_eq!(t[(2, 1)], 6.0);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Matrix<C, R> {
        let mut out = Matrix::<C, R>::ZERO;
        for i in 0..R {
            for j in 0..C {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }

    /// Element-wise (Hadamard) product: `c[i][j] = a[i][j] * b[i][j]`.
    pub fn element_mul(&self, rhs: &Self) -> Self {
        let mut out = *self;
        for i in 0..R {
            for j in 0..C {
                out.data[i][j] *= rhs.data[i][j];
            }
        }
        out
    }
}
