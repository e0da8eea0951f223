//! Common types and utilities used across the volund codebase.
//!
//! This crate provides the shared plumbing for the volund toolkit: the
//! fixed-size byte types that the encoders exchange, the hex codec used by
//! the command-line tools, and the shared error type.

/// Error types for the common crate.
pub mod error;

/// Fixed-size byte types shared by the encoding crates.
pub mod types;

/// General utility functions for common tasks.
pub mod utils;
