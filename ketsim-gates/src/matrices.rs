//! Constant single-qubit gate matrices
//!
//! Every gate this crate ships is a fixed 2x2 unitary; the matrices live
//! here as compile-time constants.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, ONE],
];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [
    [ZERO, ONE],
    [ONE, ZERO],
];

/// Pauli-Z gate matrix (phase flip)
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, NEG_ONE],
];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// S gate matrix (phase gate, √Z)
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, I],
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mult_2x2(
        a: &[[Complex64; 2]; 2],
        b: &[[Complex64; 2]; 2],
    ) -> [[Complex64; 2]; 2] {
        let mut result = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    result[i][j] += a[i][k] * b[k][j];
                }
            }
        }
        result
    }

    fn assert_matrices_eq(actual: &[[Complex64; 2]; 2], expected: &[[Complex64; 2]; 2]) {
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(actual[i][j].re, expected[i][j].re, epsilon = 1e-10);
                assert_relative_eq!(actual[i][j].im, expected[i][j].im, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_pauli_x_squaring() {
        // X² = I
        assert_matrices_eq(&mult_2x2(&PAULI_X, &PAULI_X), &IDENTITY);
    }

    #[test]
    fn test_hadamard_self_inverse() {
        // H² = I
        assert_matrices_eq(&mult_2x2(&HADAMARD, &HADAMARD), &IDENTITY);
    }

    #[test]
    fn test_s_gate_squaring() {
        // S² = Z
        assert_matrices_eq(&mult_2x2(&S_GATE, &S_GATE), &PAULI_Z);
    }

    #[test]
    fn test_all_matrices_unitary() {
        // U†U = I for every shipped gate
        for m in [&IDENTITY, &PAULI_X, &PAULI_Z, &HADAMARD, &S_GATE] {
            let dagger = [
                [m[0][0].conj(), m[1][0].conj()],
                [m[0][1].conj(), m[1][1].conj()],
            ];
            assert_matrices_eq(&mult_2x2(&dagger, m), &IDENTITY);
        }
    }
}
