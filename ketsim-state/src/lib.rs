//! Single-qubit state representation for ketsim
//!
//! This crate provides the [`Qubit`] value type: two complex amplitudes over
//! the computational basis, with conversion to and from column-vector form,
//! Born-rule measurement probabilities, and exact plus approximate equality
//! for test assertions.
//!
//! States are immutable. Gate application (see `ketsim-gates`) consumes a
//! state and returns a new one; no operation here mutates anything, so the
//! type is freely shareable across threads.
//!
//! # Example
//! ```
//! use ketsim_state::{Qubit, ZERO_KET};
//!
//! let q = ZERO_KET;
//! assert_eq!(q.probability_zero(), 1.0);
//! assert_eq!(Qubit::from(q.to_vector()), q);
//! ```

pub mod error;
pub mod qubit;

pub use error::{Result, StateError};
pub use qubit::{
    Qubit, DEFAULT_EPSILON, NEGATIVE_HADAMARD, ONE_KET, POSITIVE_HADAMARD, ZERO_KET,
};
