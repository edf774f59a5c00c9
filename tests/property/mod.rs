//! Property-based tests for digest and manifest determinism

mod determinism;
