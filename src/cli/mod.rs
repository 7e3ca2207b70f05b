//! Command-line interface definitions and handlers.

/// CLI argument collection with clap.
pub mod args;

/// Command handlers.
pub mod commands;

/// First-token classification and routing.
pub mod dispatch;

pub use args::Args;
pub use dispatch::{Action, classify, run};
