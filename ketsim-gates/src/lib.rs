//! Single-qubit quantum gate library for ketsim
//!
//! This crate provides the standard single-qubit gates (identity, Pauli-X,
//! Hadamard, Pauli-Z, S) as pure functions over the `ketsim-state` [`Qubit`]
//! type, plus the constant 2x2 matrices they are built from.
//!
//! All matrix-based gates share one mechanism, [`apply_matrix`]: state to
//! column vector, row-major multiply, back to a state.
//!
//! # Example
//! ```
//! use ketsim_gates::{change_phase, hadamard, qc_not};
//! use ketsim_state::{Qubit, ZERO_KET};
//! use std::f64::consts::FRAC_1_SQRT_2;
//!
//! // X, then Z, then H
//! let result = hadamard(change_phase(qc_not(ZERO_KET)));
//! assert_eq!(result, Qubit::from_real(-FRAC_1_SQRT_2, FRAC_1_SQRT_2));
//! ```

pub mod matrices;
pub mod matrix_ops;
pub mod standard;

pub use matrix_ops::apply_matrix;
pub use standard::{change_phase, hadamard, identity, qc_not, s_gate};

// Re-export the state type so gate callers need only one crate in scope
pub use ketsim_state::Qubit;
