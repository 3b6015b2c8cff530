//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod authenticator;
pub mod deploy_events;
pub mod publisher;
pub mod reachability;
pub mod source_control;

pub use authenticator::{AuthError, Authenticator, CredentialContext};
pub use deploy_events::{CollectingEventSink, DeployEvent, DeployEventSink, NoopEventSink};
pub use publisher::{Publication, PublishError, PublishRequest, Publisher};
pub use reachability::{ProbeError, ReachabilityProbe};
pub use source_control::{ScmError, SourceControl};
