//! Shared utilities for verso.
//!
//! This crate provides the cross-cutting concerns used by the other verso
//! crates: the unified error type, the user configuration file, manifest
//! file loading, and terminal status output.

pub mod config;
pub mod errors;
pub mod manifest;
pub mod progress;
