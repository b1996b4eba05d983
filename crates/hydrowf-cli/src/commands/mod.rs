pub mod convert;
pub mod eval;
pub mod list;
pub mod sample;
