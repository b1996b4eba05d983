//! # I/O Module
//!
//! Serialization of sampled wavefunction values.
//!
//! Samples are written as CSV with one row per grid point and a header naming every
//! column, so the output can be loaded directly by plotting or analysis tools.

pub mod samples;
