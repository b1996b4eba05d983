//! # hydrowf Core Library
//!
//! Closed-form hydrogen-atom wavefunctions for a fixed set of quantum-number triples,
//! evaluated at points in spherical coordinates, together with conversions between
//! Cartesian and spherical representations.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless, pure functions: coordinate conversion,
//!   the quantum-number key type, the analytic orbital formulas and the static table
//!   that resolves a key to its formula.
//!
//! - **[`engine`]: Sampling Machinery.** Validated sampling configuration, grid
//!   generation over lines, planes and cubes, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built from the two layers
//!   below, such as evaluating an orbital over a whole grid.
//!
//! ## Quick Start
//!
//! ```
//! use hydrowf::core::wavefunction::wavefunction;
//!
//! let psi_1s = wavefunction(1, 0, 0).unwrap();
//! let at_nucleus = psi_1s.evaluate_symmetric(0.0).unwrap();
//! assert!((at_nucleus - 1.0 / std::f64::consts::PI.sqrt()).abs() < 1e-12);
//!
//! assert!(wavefunction(9, 9, 9).is_err());
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
