//! Named aliases for the sixteen dimensioned matrix types, square shorthands,
//! and row/column vector shapes.

use crate::Matrix;

// ── Dimensioned family: MatrixRxC, R rows and C columns ────────────

/// 1×1 matrix.
pub type Matrix1x1 = Matrix<1, 1>;
/// 1×2 matrix.
pub type Matrix1x2 = Matrix<1, 2>;
/// 1×3 matrix.
pub type Matrix1x3 = Matrix<1, 3>;
/// 1×4 matrix.
pub type Matrix1x4 = Matrix<1, 4>;

/// 2×1 matrix.
pub type Matrix2x1 = Matrix<2, 1>;
/// 2×2 matrix.
pub type Matrix2x2 = Matrix<2, 2>;
/// 2×3 matrix.
pub type Matrix2x3 = Matrix<2, 3>;
/// 2×4 matrix.
pub type Matrix2x4 = Matrix<2, 4>;

/// 3×1 matrix.
pub type Matrix3x1 = Matrix<3, 1>;
/// 3×2 matrix.
pub type Matrix3x2 = Matrix<3, 2>;
/// 3×3 matrix.
pub type Matrix3x3 = Matrix<3, 3>;
/// 3×4 matrix.
pub type Matrix3x4 = Matrix<3, 4>;

/// 4×1 matrix.
pub type Matrix4x1 = Matrix<4, 1>;
/// 4×2 matrix.
pub type Matrix4x2 = Matrix<4, 2>;
/// 4×3 matrix.
pub type Matrix4x3 = Matrix<4, 3>;
/// 4×4 matrix.
pub type Matrix4x4 = Matrix<4, 4>;

// ── Square shorthands ──────────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1 = Matrix<1, 1>;
/// 2×2 matrix.
pub type Matrix2 = Matrix<2, 2>;
/// 3×3 matrix.
pub type Matrix3 = Matrix<3, 3>;
/// 4×4 matrix.
pub type Matrix4 = Matrix<4, 4>;

// ── Vector shapes ──────────────────────────────────────────────────

/// A row vector (1×C matrix). Produced by [`Matrix::row`].
pub type RowVector<const C: usize> = Matrix<1, C>;
/// A column vector (R×1 matrix). Produced by [`Matrix::col`].
pub type ColumnVector<const R: usize> = Matrix<R, 1>;

/// 1-element row vector.
pub type RowVector1 = RowVector<1>;
/// 2-element row vector.
pub type RowVector2 = RowVector<2>;
/// 3-element row vector.
pub type RowVector3 = RowVector<3>;
/// 4-element row vector.
pub type RowVector4 = RowVector<4>;

/// 1-element column vector.
pub type ColumnVector1 = ColumnVector<1>;
/// 2-element column vector.
pub type ColumnVector2 = ColumnVector<2>;
/// 3-element column vector.
pub type ColumnVector3 = ColumnVector<3>;
/// 4-element column vector.
pub type ColumnVector4 = ColumnVector<4>;
