//! Common utilities for the Sable crates.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal diagnostics

pub mod warning;
