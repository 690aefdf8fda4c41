//! Deterministic, pure logic for prompt feedback.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and return deterministic outputs suitable for tests.

pub mod analyzer;
pub mod lifecycle;
pub mod rules;
pub mod types;
