//! Integration test suite for the table layouts.
//!
//! 1. Worked query examples through the public API
//! 2. Cross-layout equivalence under arbitrary mutation sequences

pub mod equivalence_tests;
pub mod helpers;
pub mod query_tests;
