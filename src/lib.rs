//! # smallmat
//!
//! Small fixed-dimension dense matrices over `f64`, no-std compatible.
//! Covers the sixteen shapes with 1 through 4 rows and columns, all sharing
//! one const-generic core. Stack-allocated, no heap, no FPU assumptions
//! beyond IEEE-754 doubles.
//!
//! ## Quick start
//!
//! ```
//! use smallmat::{Matrix2x4, Matrix4x4};
//!
//! let a = Matrix2x4::new([
//!     [1.0, 0.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0, 0.0],
//! ]);
//! let g: Matrix4x4 = a.transpose() * a;
//! assert_eq!(g[(0, 0)], 1.0);
//! assert_eq!(g[(2, 2)], 0.0);
//! ```
//!
//! ## Overview
//!
//! - [`Matrix<R, C>`](Matrix) — fixed-size matrix with `R` rows and `C`
//!   columns in row-major `[[f64; C]; R]` storage. Element-wise addition and
//!   subtraction, scalar multiplication (both operand orders), and matrix
//!   multiplication `Matrix<R, C> * Matrix<C, C2> -> Matrix<R, C2>` with the
//!   inner dimension checked at compile time.
//! - [`matrix::aliases`] — `Matrix1x1` … `Matrix4x4` names for the full
//!   family, square shorthands, and [`RowVector`] / [`ColumnVector`].
//! - Row/column decomposition ([`Matrix::row`], [`Matrix::col`]) and
//!   [`Matrix::transpose`].
//! - Tolerance equality: `==` compares element-wise within
//!   [`Matrix::EPSILON`]; the [`approx`] traits (`AbsDiffEq`, `RelativeEq`,
//!   `UlpsEq`) are implemented for caller-chosen tolerances.
//! - Hashing over raw element bit patterns (see [`Matrix`] type docs for the
//!   interaction with tolerance equality).
//! - Fallible bounds-checked access ([`Matrix::get`], [`Matrix::set`])
//!   returning [`OutOfRange`] instead of panicking.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Standard library; disable for `no_std` targets |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod matrix;

pub use matrix::aliases::{
    ColumnVector, ColumnVector1, ColumnVector2, ColumnVector3, ColumnVector4, Matrix1, Matrix1x1,
    Matrix1x2, Matrix1x3, Matrix1x4, Matrix2, Matrix2x1, Matrix2x2, Matrix2x3, Matrix2x4, Matrix3,
    Matrix3x1, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4, Matrix4x1, Matrix4x2, Matrix4x3,
    Matrix4x4, RowVector, RowVector1, RowVector2, RowVector3, RowVector4,
};
pub use matrix::{Axis, Matrix, OutOfRange};
