#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

//! Enigma Engine - rotor cipher machine core
//!
//! This crate implements the cipher core for the Enigma encryption and
//! puzzle service. It provides the rotor/reflector/plugboard signal path,
//! the historically correct stepping algorithm (including the
//! double-stepping anomaly), validated machine configuration, and the
//! static challenge catalog with solution checking.

// Canonical machine modelled (exact to the historical wiring):
//
// - 3 rotors from the Enigma I set (I..V), single turnover notch each
// - Fixed reflector from the catalog (UKW-A, UKW-B, UKW-C)
// - Plugboard with up to 13 symmetric letter pairs
// - Stepping: right rotor every letter, middle on right-rotor turnover
//   or on its own notch (double-step), left on middle-rotor turnover
//
// This implementation prioritizes:
// 1. Correctness: exact reproduction of the published permutation network
// 2. Safety: invalid configurations are rejected before any state changes
// 3. Maintainability: small, strongly typed components

// Core modules
pub mod types;
pub mod errors;
pub mod rotor;
pub mod plugboard;
pub mod reflector;
pub mod machine;
pub mod challenge;

// Re-export commonly used types and functions
pub use types::*;
pub use errors::EnigmaError;
pub use rotor::Rotor;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use machine::Machine;
pub use challenge::{normalize_solution, Challenge, ChallengeRegistry, ChallengeSettings};

// Version constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
