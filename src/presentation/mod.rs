//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use dashctl::presentation::factory;
//!
//! let use_case = factory::create_dispatch_use_case(&config.verify);
//! let outcome = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ConfigCommand, DeployArgs};
pub use factory::create_dispatch_use_case;
