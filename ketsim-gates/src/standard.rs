//! Standard single-qubit gate functions
//!
//! Every gate is a pure, total function `Qubit -> Qubit`. Gates compose by
//! ordinary function chaining, innermost first:
//! `hadamard(change_phase(qc_not(q)))` applies X, then Z, then H.

use crate::matrices;
use crate::matrix_ops::apply_matrix;
use ketsim_state::Qubit;

/// Identity gate
///
/// Returns the state unchanged. Useful as the base case of a composition
/// chain.
#[inline]
pub fn identity(qubit: Qubit) -> Qubit {
    qubit
}

/// Pauli-X gate (NOT gate)
///
/// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩. Applied as the general Pauli-X
/// matrix, so superpositions get their amplitudes swapped rather than
/// being rejected; on the basis kets the result is exact.
///
/// # Example
/// ```
/// use ketsim_gates::qc_not;
/// use ketsim_state::{ONE_KET, ZERO_KET};
///
/// assert_eq!(qc_not(ZERO_KET), ONE_KET);
/// assert_eq!(qc_not(ONE_KET), ZERO_KET);
/// ```
#[inline]
pub fn qc_not(qubit: Qubit) -> Qubit {
    apply_matrix(qubit, &matrices::PAULI_X)
}

/// Hadamard gate
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2, H|1⟩ = (|0⟩ − |1⟩)/√2.
/// Self-inverse: applying it twice returns (approximately) the original
/// state.
#[inline]
pub fn hadamard(qubit: Qubit) -> Qubit {
    apply_matrix(qubit, &matrices::HADAMARD)
}

/// Pauli-Z gate (phase flip)
///
/// Z|0⟩ = |0⟩, Z|1⟩ = −|1⟩. Leaves measurement probabilities in the
/// computational basis unchanged.
#[inline]
pub fn change_phase(qubit: Qubit) -> Qubit {
    apply_matrix(qubit, &matrices::PAULI_Z)
}

/// S gate (phase gate, √Z)
///
/// Multiplies the |1⟩ amplitude by i, a 90° phase rotation. Amplitude
/// magnitudes, and thus probabilities, are unchanged.
#[inline]
pub fn s_gate(qubit: Qubit) -> Qubit {
    apply_matrix(qubit, &matrices::S_GATE)
}
