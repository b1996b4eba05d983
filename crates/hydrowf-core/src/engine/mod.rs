//! # Engine Module
//!
//! Machinery for evaluating a resolved wavefunction over many points at once.
//!
//! - [`config`] - Validated sampling configuration and its builder
//! - [`grid`] - Expansion of radial, planar and cubic grids into points
//! - [`progress`] - Callback-based progress reporting for long evaluations
//! - [`error`] - Errors surfaced by engine operations and workflows

pub mod config;
pub mod error;
pub mod grid;
pub mod progress;
