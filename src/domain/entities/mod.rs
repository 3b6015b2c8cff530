//! Domain Entities
//!
//! Core types describing what is being deployed and where.

mod checkout;
mod manifest;
mod platform;
mod record;

pub use checkout::Checkout;
pub use manifest::{Manifest, Requirement};
pub use platform::{builtin_profiles, PlatformProfile, PLACEHOLDERS};
pub use record::{DeploymentRecord, LogLine};
