//! Single-qubit state representation

use crate::error::{Result, StateError};
use approx::{AbsDiffEq, RelativeEq};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Default tolerance for approximate state comparison
pub const DEFAULT_EPSILON: f64 = 1e-6;

const C_ZERO: Complex64 = Complex64::new(0.0, 0.0);
const C_ONE: Complex64 = Complex64::new(1.0, 0.0);
const C_INV_SQRT2: Complex64 = Complex64::new(FRAC_1_SQRT_2, 0.0);
const C_NEG_INV_SQRT2: Complex64 = Complex64::new(-FRAC_1_SQRT_2, 0.0);

/// The computational basis state |0⟩
pub const ZERO_KET: Qubit = Qubit {
    zero_amplitude: C_ONE,
    one_amplitude: C_ZERO,
};

/// The computational basis state |1⟩
pub const ONE_KET: Qubit = Qubit {
    zero_amplitude: C_ZERO,
    one_amplitude: C_ONE,
};

/// The |+⟩ state, (|0⟩ + |1⟩)/√2 — the image of |0⟩ under Hadamard
pub const POSITIVE_HADAMARD: Qubit = Qubit {
    zero_amplitude: C_INV_SQRT2,
    one_amplitude: C_INV_SQRT2,
};

/// The |−⟩ state, (|0⟩ − |1⟩)/√2 — the image of |1⟩ under Hadamard
pub const NEGATIVE_HADAMARD: Qubit = Qubit {
    zero_amplitude: C_INV_SQRT2,
    one_amplitude: C_NEG_INV_SQRT2,
};

/// An immutable single-qubit state α|0⟩ + β|1⟩
///
/// Holds the two complex amplitudes of the computational basis states.
/// Construction does not normalize: a physically valid state satisfies
/// |α|² + |β|² = 1, but the probability queries divide by the total
/// squared magnitude so they are correct for any non-zero vector.
///
/// Gates never mutate their input; every operation returns a new `Qubit`.
///
/// # Example
/// ```
/// use ketsim_state::{Qubit, ZERO_KET};
///
/// let q = Qubit::from_real(1.0, 0.0);
/// assert_eq!(q, ZERO_KET);
/// assert_eq!(q.probability_zero(), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qubit {
    zero_amplitude: Complex64,
    one_amplitude: Complex64,
}

impl Qubit {
    /// Create a qubit state from its two complex amplitudes
    #[inline]
    pub const fn new(zero_amplitude: Complex64, one_amplitude: Complex64) -> Self {
        Self {
            zero_amplitude,
            one_amplitude,
        }
    }

    /// Create a qubit state from two real amplitudes
    ///
    /// # Example
    /// ```
    /// use ketsim_state::{Qubit, ONE_KET};
    /// assert_eq!(Qubit::from_real(0.0, 1.0), ONE_KET);
    /// ```
    #[inline]
    pub const fn from_real(zero_amplitude: f64, one_amplitude: f64) -> Self {
        Self {
            zero_amplitude: Complex64::new(zero_amplitude, 0.0),
            one_amplitude: Complex64::new(one_amplitude, 0.0),
        }
    }

    /// Create a qubit state from a column vector
    ///
    /// # Errors
    /// Returns [`StateError::ShapeError`] unless the slice has exactly
    /// two entries; the error message quotes the offending input.
    ///
    /// # Example
    /// ```
    /// use ketsim_state::{Qubit, ZERO_KET};
    /// use num_complex::Complex64;
    ///
    /// let v = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
    /// assert_eq!(Qubit::from_vector(&v).unwrap(), ZERO_KET);
    /// assert!(Qubit::from_vector(&v[..1]).is_err());
    /// ```
    pub fn from_vector(vector: &[Complex64]) -> Result<Self> {
        match *vector {
            [zero_amplitude, one_amplitude] => Ok(Self {
                zero_amplitude,
                one_amplitude,
            }),
            _ => Err(StateError::ShapeError {
                entries: vector.to_vec(),
            }),
        }
    }

    /// The state as a 2-element column vector, [α, β]
    ///
    /// Round-trips with [`Qubit::from_vector`] and `From<[Complex64; 2]>`.
    #[inline]
    pub const fn to_vector(&self) -> [Complex64; 2] {
        [self.zero_amplitude, self.one_amplitude]
    }

    /// Amplitude of the |0⟩ basis state
    #[inline]
    pub const fn zero_amplitude(&self) -> Complex64 {
        self.zero_amplitude
    }

    /// Amplitude of the |1⟩ basis state
    #[inline]
    pub const fn one_amplitude(&self) -> Complex64 {
        self.one_amplitude
    }

    /// Total squared magnitude, |α|² + |β|²
    ///
    /// Equals 1 for a normalized state.
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.zero_amplitude.norm_sqr() + self.one_amplitude.norm_sqr()
    }

    /// Check whether the state is normalized, ||α|² + |β|² − 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() < epsilon
    }

    /// Born-rule probability of measuring |0⟩
    ///
    /// Computed as |α|² / (|α|² + |β|²), so the result is correct for
    /// unnormalized states as well. For the degenerate all-zero state the
    /// division is 0/0 and this returns `NaN` rather than panicking.
    pub fn probability_zero(&self) -> f64 {
        self.zero_amplitude.norm_sqr() / self.norm_sqr()
    }

    /// Born-rule probability of measuring |1⟩
    ///
    /// Computed as |β|² / (|α|² + |β|²). Returns `NaN` for the all-zero
    /// state, matching [`Qubit::probability_zero`].
    pub fn probability_one(&self) -> f64 {
        self.one_amplitude.norm_sqr() / self.norm_sqr()
    }
}

impl From<[Complex64; 2]> for Qubit {
    #[inline]
    fn from(vector: [Complex64; 2]) -> Self {
        Self {
            zero_amplitude: vector[0],
            one_amplitude: vector[1],
        }
    }
}

impl From<Qubit> for [Complex64; 2] {
    #[inline]
    fn from(qubit: Qubit) -> Self {
        qubit.to_vector()
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})|0⟩ + ({})|1⟩",
            self.zero_amplitude, self.one_amplitude
        )
    }
}

impl AbsDiffEq for Qubit {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.zero_amplitude.re.abs_diff_eq(&other.zero_amplitude.re, epsilon)
            && self.zero_amplitude.im.abs_diff_eq(&other.zero_amplitude.im, epsilon)
            && self.one_amplitude.re.abs_diff_eq(&other.one_amplitude.re, epsilon)
            && self.one_amplitude.im.abs_diff_eq(&other.one_amplitude.im, epsilon)
    }
}

impl RelativeEq for Qubit {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.zero_amplitude
            .re
            .relative_eq(&other.zero_amplitude.re, epsilon, max_relative)
            && self
                .zero_amplitude
                .im
                .relative_eq(&other.zero_amplitude.im, epsilon, max_relative)
            && self
                .one_amplitude
                .re
                .relative_eq(&other.one_amplitude.re, epsilon, max_relative)
            && self
                .one_amplitude
                .im
                .relative_eq(&other.one_amplitude.im, epsilon, max_relative)
    }
}
