use crate::matrix::aliases::ColumnVector;
use crate::Matrix;

impl<const N: usize> Matrix<N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> f64 {
        let mut sum = 0.0;
        for i in 0..N {
            sum += self.data[i][i];
        }
        sum
    }

    /// Extract the diagonal as a column vector.
    pub fn diag(&self) -> ColumnVector<N> {
        let mut v = ColumnVector::<N>::ZERO;
        for i in 0..N {
            v.data[i][0] = self.data[i][i];
        }
        v
    }

    /// Create a diagonal matrix from a column vector.
    pub fn from_diag(v: &ColumnVector<N>) -> Self {
        let mut m = Self::ZERO;
        for i in 0..N {
            m.data[i][i] = v.data[i][0];
        }
        m
    }

    /// Check if the matrix is symmetric (A == A^T) under tolerance equality.
    pub fn is_symmetric(&self) -> bool {
        *self == self.transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ColumnVector3, Matrix, Matrix3};

    #[test]
    fn trace() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);
    }

    #[test]
    fn diag_round_trip() {
        let v = ColumnVector3::new([[1.0], [2.0], [3.0]]);
        let m = Matrix3::from_diag(&v);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 2.0);
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(m.diag(), v);
    }

    #[test]
    fn symmetric() {
        let s = Matrix::new([[1.0, 2.0], [2.0, 5.0]]);
        assert!(s.is_symmetric());

        let a = Matrix::new([[1.0, 2.0], [3.0, 5.0]]);
        assert!(!a.is_symmetric());
    }
}
