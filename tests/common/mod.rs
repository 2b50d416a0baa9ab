//! Common test utilities for Sweep CLI tests.
//!
//! This module provides `TestEnv`: an isolated root directory plus helpers
//! to run the built `sweep` binary against it.

pub mod env;

pub use env::*;
