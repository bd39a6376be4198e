//! Shared utilities for the FinSage workspace
//!
//! This crate provides common functionality used across the workspace,
//! currently logging and tracing setup for the binaries.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with};
