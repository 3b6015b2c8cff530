//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and network I/O.
//!
//! ## Structure
//!
//! - `platform/` - Publisher, authenticators, git and HTTP probe
//! - `events/` - Event sinks
//! - `process` - Child process runner shared by the adapters

pub mod events;
pub mod platform;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use platform::{
    ChainAuthenticator, CommandAuthenticator, CommandPublisher, EnvAuthenticator, GitCli, HttpProbe,
};
