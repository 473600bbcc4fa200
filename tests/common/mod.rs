//! Common test utilities for depgen CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - Fixtures: reusable manifests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
