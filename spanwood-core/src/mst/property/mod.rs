//! Property-based tests for the Kruskal spanning-forest builder.
//!
//! Checks the builder against an independent Prim's oracle, validates the
//! structural guarantees (size bound, acyclicity, key agreement, stable tie
//! order) and exercises the trivial-hint and key-symmetry rules across graph
//! shapes with varied weight distributions.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
