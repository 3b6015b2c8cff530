//! Common test utilities for dashctl CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated checkout and home directories plus CLI helpers
//! - Fixtures: reusable manifests and platform profiles

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
