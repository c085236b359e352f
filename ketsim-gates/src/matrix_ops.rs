//! Generic 2x2 matrix application
//!
//! This is the single mechanism the matrix-based gates in
//! [`crate::standard`] are built on: convert the state to column-vector
//! form, left-multiply by the gate matrix, convert back.

use ketsim_state::Qubit;
use num_complex::Complex64;

/// Apply a 2x2 matrix to a qubit state, returning the new state
///
/// Computes `M · [α, β]ᵀ` in row-major order. The input is never mutated.
///
/// # Example
/// ```
/// use ketsim_gates::{apply_matrix, matrices};
/// use ketsim_state::{ONE_KET, ZERO_KET};
///
/// assert_eq!(apply_matrix(ZERO_KET, &matrices::PAULI_X), ONE_KET);
/// ```
pub fn apply_matrix(qubit: Qubit, matrix: &[[Complex64; 2]; 2]) -> Qubit {
    let [zero, one] = qubit.to_vector();
    Qubit::from([
        matrix[0][0] * zero + matrix[0][1] * one,
        matrix[1][0] * zero + matrix[1][1] * one,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices;
    use ketsim_state::{ONE_KET, POSITIVE_HADAMARD, ZERO_KET};

    #[test]
    fn test_identity_matrix_is_noop() {
        for q in [ZERO_KET, ONE_KET, POSITIVE_HADAMARD] {
            assert_eq!(apply_matrix(q, &matrices::IDENTITY), q);
        }
    }

    #[test]
    fn test_application_is_linear() {
        // M(a·v) = a·(Mv), checked through an unnormalized state
        let scaled = Qubit::from_real(2.0, 0.0);
        let result = apply_matrix(scaled, &matrices::PAULI_X);
        assert_eq!(result, Qubit::from_real(0.0, 2.0));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let q = ZERO_KET;
        let _ = apply_matrix(q, &matrices::PAULI_X);
        assert_eq!(q, ZERO_KET);
    }
}
