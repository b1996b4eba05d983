//! # Core Module
//!
//! The stateless computational foundation of hydrowf.
//!
//! ## Overview
//!
//! Everything in this module is a pure function of its inputs: no state is kept
//! between calls, nothing allocates beyond the returned values, and every item is
//! safe to use from any number of threads without synchronization.
//!
//! ## Architecture
//!
//! - **Coordinate Conversion** ([`coordinates`]) - Cartesian to spherical and back
//! - **Quantum Numbers** ([`quantum`]) - The `(n, l, m)` key, orbital labels and parsing
//! - **Analytic Formulas** ([`orbitals`]) - One function per tabulated orbital
//! - **Resolution** ([`wavefunction`]) - Static table mapping a key to its formula
//! - **Errors** ([`error`]) - The lookup failure raised for untabulated keys
//! - **Output** ([`io`]) - CSV serialization of sampled values
//!
//! ## Scientific Foundation
//!
//! The formulas are the textbook hydrogen orbitals in atomic units (Bohr radii),
//! written in their real form: `m = 1` and `m = -1` select the `cos φ` and `sin φ`
//! combinations respectively.

pub mod coordinates;
pub mod error;
pub mod io;
pub mod orbitals;
pub mod quantum;
pub mod wavefunction;
