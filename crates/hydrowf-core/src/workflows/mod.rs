//! # Workflows Module
//!
//! High-level procedures combining the [`crate::core`] formulas with the
//! [`crate::engine`] machinery.
//!
//! - [`sample`] - Evaluate one orbital over a configured grid of points

pub mod sample;
