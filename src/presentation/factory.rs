//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, DispatchUseCase};
use crate::config::VerifyConfig;
use crate::infrastructure::{ChainAuthenticator, CommandPublisher, GitCli, HttpProbe};

/// Type alias for the concrete DispatchUseCase with all dependencies
pub type ConcreteDispatchUseCase = DispatchUseCase<CommandPublisher, ChainAuthenticator, GitCli>;

/// Create a dispatch use case with all dependencies wired up
///
/// Credentials come from the environment first, then the platform CLI.
/// `--verify` polls with the given settings.
pub fn create_dispatch_use_case(verify: &VerifyConfig) -> ConcreteDispatchUseCase {
    DispatchUseCase::new(
        CommandPublisher::new(),
        create_authenticator(),
        GitCli::new(),
    )
    .with_probe(Box::new(HttpProbe::new(*verify)))
}

/// Authenticator used by `deploy` and `login`
pub fn create_authenticator() -> ChainAuthenticator {
    ChainAuthenticator::standard()
}

/// Create a check use case
pub fn create_check_use_case() -> CheckUseCase {
    CheckUseCase::new()
}
