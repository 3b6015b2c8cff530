//! Domain Services
//!
//! Stateless rules shared by the use cases and adapters.

mod failure_classifier;

pub use failure_classifier::{classify_failure, FailureClass, AUTH_MARKERS};
