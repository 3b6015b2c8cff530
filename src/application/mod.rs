//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DispatchUseCase` - Validate the manifest, pick a strategy, trigger the platform
//! - `CheckUseCase` - Local pre-flight report (manifest, entry point, profile)

pub mod check;
pub mod dispatch;

pub use check::{CheckItem, CheckOptions, CheckReport, CheckStatus, CheckUseCase};
pub use dispatch::{DispatchOptions, DispatchOutcome, DispatchUseCase};
