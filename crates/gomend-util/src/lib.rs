//! Shared utilities for gomend.
//!
//! This crate provides cross-cutting concerns used by the other gomend crates:
//! the error type, filesystem helpers, process spawning, and Cargo-style
//! status output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
