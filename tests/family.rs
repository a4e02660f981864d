//! End-to-end checks over the 1..=4 dimensioned family: multiplication
//! against hand-computed products, the algebraic contracts (inverse ops,
//! scalar commutativity, associativity, transpose involution), and the
//! equality/hashing behavior.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use approx::assert_abs_diff_eq;
use smallmat::{Axis, Matrix, Matrix2x4, Matrix4x2, Matrix4x4};

fn hash_of<const R: usize, const C: usize>(m: &Matrix<R, C>) -> u64 {
    let mut h = DefaultHasher::new();
    m.hash(&mut h);
    h.finish()
}

// ── Multiplication against hand-computed sums ────────────────────────

#[test]
fn selector_times_own_transpose() {
    // Two identity-like selector rows; against their own transpose the
    // product collapses to a 4×4 with ones on the first two diagonal slots.
    let a = Matrix2x4::new([[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]]);
    let t: Matrix4x2 = a.transpose();

    let g: Matrix4x4 = t * a;
    let expected = Matrix4x4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
    ]);
    assert_eq!(g, expected);

    // The other order gives the 2×2 identity.
    let small = a * t;
    assert_eq!(small, Matrix::<2, 2>::eye());
}

#[test]
fn dense_4x2_times_2x4() {
    let a = Matrix4x2::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
    let b = Matrix2x4::new([[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]]);

    let c = a * b;
    // Each element spelled out: c[i][j] = a[i][0]*b[0][j] + a[i][1]*b[1][j]
    let expected = Matrix4x4::new([
        [11.0, 14.0, 17.0, 20.0],
        [23.0, 30.0, 37.0, 44.0],
        [35.0, 46.0, 57.0, 68.0],
        [47.0, 62.0, 77.0, 92.0],
    ]);
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(c[(i, j)], expected[(i, j)], "mismatch at ({}, {})", i, j);
        }
    }
}

#[test]
fn chain_through_every_inner_dimension() {
    // 1×2 * 2×3 * 3×4 * 4×1 exercises every inner dimension of the family.
    let a = Matrix::<1, 2>::new([[1.0, 2.0]]);
    let b = Matrix::<2, 3>::new([[1.0, 0.0, 2.0], [0.0, 1.0, 3.0]]);
    let c = Matrix::<3, 4>::new([
        [1.0, 2.0, 0.0, 0.0],
        [0.0, 1.0, 2.0, 0.0],
        [0.0, 0.0, 1.0, 2.0],
    ]);
    let d = Matrix::<4, 1>::new([[1.0], [1.0], [1.0], [1.0]]);

    let result: Matrix<1, 1> = a * b * c * d;
    // a*b = [1, 2, 8]; (a*b)*c = [1, 4, 12, 16]; dot with ones = 33.
    assert_eq!(result[(0, 0)], 33.0);
}

// ── Algebraic contracts ─────────────────────────────────────────────

#[test]
fn add_sub_inverse() {
    let a = Matrix::<3, 2>::new([[0.1, 0.2], [0.3, 0.4], [0.5, 0.6]]);
    let b = Matrix::<3, 2>::new([[1.7, -2.9], [0.001, 44.0], [-8.5, 0.125]]);
    assert_eq!((a + b) - b, a);
}

#[test]
fn scalar_multiplication_commutes() {
    let m = Matrix::<2, 3>::new([[1.0, -2.0, 3.0], [4.5, 0.0, -6.25]]);
    for s in [0.0, 1.0, -1.0, 0.5, 3.25, -1e6] {
        assert_eq!(s * m, m * s);
    }
}

#[test]
fn multiplication_associative() {
    let a = Matrix::<2, 3>::new([[0.5, 1.5, -2.0], [3.0, -0.25, 1.0]]);
    let b = Matrix::<3, 4>::new([
        [1.0, 2.0, 3.0, 4.0],
        [-1.0, 0.5, 2.5, 0.0],
        [0.25, -3.0, 1.0, 2.0],
    ]);
    let c = Matrix::<4, 2>::new([[1.0, 0.5], [2.0, -1.0], [0.0, 3.0], [-2.0, 1.0]]);

    // Exact equality can drift with reordered rounding; the tolerance
    // contract is what the family promises.
    assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-9);
}

#[test]
fn transpose_involutive_across_shapes() {
    let a = Matrix::<1, 4>::new([[1.0, -2.0, 3.0, -4.0]]);
    assert_eq!(a.transpose().transpose(), a);

    let b = Matrix::<3, 2>::new([[0.1, 0.2], [0.3, 0.4], [0.5, 0.6]]);
    assert_eq!(b.transpose().transpose(), b);

    let c = Matrix::<4, 4>::from_fn(|i, j| (i * 4 + j) as f64);
    assert_eq!(c.transpose().transpose(), c);
}

#[test]
fn decomposition_matches_transpose() {
    // Row i of m is column i of m^T.
    let m = Matrix4x2::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
    let t = m.transpose();
    for i in 0..4 {
        assert_eq!(m.row(i), t.col(i).transpose());
    }
}

// ── Bounds-checked access ───────────────────────────────────────────

#[test]
fn out_of_range_reporting() {
    let mut m = Matrix4x2::ZERO;

    assert!(m.set(0, 0, 1.0).is_ok());
    assert_eq!(m.get(0, 0), Ok(1.0));

    let err = m.get(4, 0).unwrap_err();
    assert_eq!(err.axis, Axis::Row);
    assert_eq!(err.index, 4);
    assert_eq!(err.bound, 4);

    let err = m.set(0, 2, 1.0).unwrap_err();
    assert_eq!(err.axis, Axis::Column);
    assert_eq!(err.index, 2);
    assert_eq!(err.bound, 2);
    assert_eq!(err.to_string(), "column index 2 out of range (valid range 0..2)");
}

// ── Equality, hashing, rendering ────────────────────────────────────

#[test]
fn zero_fill_equality_and_hash() {
    let m = Matrix4x2::fill(0.0);
    assert_eq!(m, Matrix4x2::ZERO);
    assert_eq!(hash_of(&m), hash_of(&Matrix4x2::ZERO));
}

#[test]
fn display_format() {
    let m = Matrix4x2::new([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
    assert_eq!(
        m.to_string(),
        "Matrix4x2 {| 1.00 | 2.00 |} {| 3.00 | 4.00 |} {| 5.00 | 6.00 |} {| 7.00 | 8.00 |}"
    );
}
