//! I/O helpers for `prompt-feedback` commands.

pub mod agent;
pub mod config;
pub mod source;
