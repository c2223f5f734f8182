//! Core repair engine for `go.mod` manifests left behind by a conflicted merge.
//!
//! The pipeline runs in one direction: [`conflict`] classifies marker lines,
//! [`extract`] walks the manifest and collects `require` candidates,
//! [`version`] parses and orders module versions, and [`resolver`] keeps the
//! latest declaration per module path and rebuilds the file without the
//! deleted lines. Everything here is pure and works on borrowed text.

pub mod config;
pub mod conflict;
pub mod deletion;
pub mod extract;
pub mod manifest;
pub mod report;
pub mod resolver;
pub mod version;

pub use resolver::{repair, Repair};
