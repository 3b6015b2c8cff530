//! Platform adapters
//!
//! Implementations of the dispatch ports that shell out to external tools:
//! - `CommandPublisher`: the platform's own publish CLI
//! - `EnvAuthenticator`, `CommandAuthenticator`, `ChainAuthenticator`: credentials
//! - `GitCli`: `git` for git-integrated platforms
//! - `HttpProbe`: reachability check behind `--verify`

mod auth;
mod git;
mod probe;
mod publisher;

pub use auth::{ChainAuthenticator, CommandAuthenticator, EnvAuthenticator};
pub use git::GitCli;
pub use probe::HttpProbe;
pub use publisher::CommandPublisher;
