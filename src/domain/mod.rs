//! Domain Layer
//!
//! Pure deployment concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Checkout, Manifest, PlatformProfile, DeploymentRecord
//! - `value_objects/` - DeploymentTarget, DeploymentState, DeployUrl, EnvOverrides
//! - `services/` - Failure classification
//! - `ports/` - Interface definitions for infrastructure (publisher, auth, git, probe, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Only `Manifest::load` reads the checkout; everything else goes through ports
//! 2. **Ports & Adapters** - The hosting platform is an opaque collaborator behind `Publisher`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
