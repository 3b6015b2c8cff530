//! Dispatch Module
//!
//! Orchestrates one deployment of a checkout onto a hosting platform.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DispatchOptions`)
//! - `outcome` - Result types (`DispatchOutcome`)
//! - `use_case` - Core use case logic (`DispatchUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use dashctl::application::dispatch::{DispatchOptions, DispatchUseCase};
//!
//! let use_case = DispatchUseCase::new(publisher, authenticator, source_control);
//! let outcome = use_case.execute(&DispatchOptions::new(checkout, profile, "painel"))?;
//! ```

mod options;
mod outcome;
mod use_case;

pub use options::{DispatchOptions, DEFAULT_ENTRYPOINT};
pub use outcome::DispatchOutcome;
pub use use_case::DispatchUseCase;
