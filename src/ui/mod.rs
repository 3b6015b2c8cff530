//! Terminal UI for the dashctl binary

pub mod console;
pub mod context;
pub mod error;
pub mod icon;
pub mod json;
pub mod terminal;
pub mod theme;
pub mod views;
