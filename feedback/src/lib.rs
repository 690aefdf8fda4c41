//! Rule-based feedback for agent instruction prompts.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (rules, analyzer, suggestion
//!   lifecycle). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, prompt files, agent
//!   definitions).
//!
//! Orchestration modules ([`editor`], [`check`], [`apply`]) couple core logic
//! with I/O to implement CLI commands.

pub mod apply;
pub mod check;
pub mod core;
pub mod editor;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
