//! Benchmark support crate for spanwood.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks of the spanning-forest builder.

pub mod error;
pub mod params;
pub mod source;
