//! Example walking the computational basis states through gate chains
//!
//! Shows constructing states, applying named gates, chaining them, and
//! reading Born-rule probabilities back out.

use ketsim_gates::{change_phase, hadamard, qc_not, s_gate};
use ketsim_state::{Qubit, ONE_KET, ZERO_KET};
use std::f64::consts::FRAC_1_SQRT_2;

fn main() {
    println!("=== Single-Qubit Gate Walkthrough ===\n");

    example_bit_flip();
    example_superposition();
    example_phase_is_invisible_to_measurement();
    example_composition();
}

fn example_bit_flip() {
    println!("-- Pauli-X (NOT) --");
    let flipped = qc_not(ZERO_KET);
    println!("X|0⟩ = {}", flipped);
    println!("P(0) = {:.3}, P(1) = {:.3}\n", flipped.probability_zero(), flipped.probability_one());
}

fn example_superposition() {
    println!("-- Hadamard --");
    let plus = hadamard(ZERO_KET);
    println!("H|0⟩ = {}", plus);
    println!("P(0) = {:.3}, P(1) = {:.3}", plus.probability_zero(), plus.probability_one());

    let back = hadamard(plus);
    println!("H(H|0⟩) = {} (back to |0⟩)\n", back);
}

fn example_phase_is_invisible_to_measurement() {
    println!("-- Phase gates --");
    let z = change_phase(ONE_KET);
    let s = s_gate(ONE_KET);
    println!("Z|1⟩ = {}", z);
    println!("S|1⟩ = {}", s);
    println!(
        "both still measure |1⟩ with probability {:.3} / {:.3}\n",
        z.probability_one(),
        s.probability_one()
    );
}

fn example_composition() {
    println!("-- Composition --");
    // Innermost first: X, then Z, then H
    let result = hadamard(change_phase(qc_not(ZERO_KET)));
    println!("H(Z(X|0⟩)) = {}", result);

    let by_hand = Qubit::from_real(-FRAC_1_SQRT_2, FRAC_1_SQRT_2);
    assert_eq!(result, by_hand);
    println!("matches the hand-computed (−|0⟩ + |1⟩)/√2");
}
