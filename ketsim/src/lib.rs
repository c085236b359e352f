//! ketsim — a single-qubit quantum state and gate engine
//!
//! Facade crate re-exporting the public surface of `ketsim-state` and
//! `ketsim-gates`. No logic of its own.
//!
//! # Example
//! ```
//! use ketsim::{hadamard, Qubit, POSITIVE_HADAMARD, ZERO_KET};
//!
//! let plus = hadamard(ZERO_KET);
//! assert_eq!(plus, POSITIVE_HADAMARD);
//! assert_eq!(Qubit::from(plus.to_vector()), plus);
//! ```

pub use ketsim_gates::{
    apply_matrix, change_phase, hadamard, identity, matrices, qc_not, s_gate,
};
pub use ketsim_state::{
    Qubit, Result, StateError, DEFAULT_EPSILON, NEGATIVE_HADAMARD, ONE_KET, POSITIVE_HADAMARD,
    ZERO_KET,
};
