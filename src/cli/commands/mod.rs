//! Command handlers.

/// `--generate-config` handler.
pub mod generate_config;

/// `-h` / `--help` handler.
pub mod help;

/// `--list` handler.
pub mod list;

/// Provider search handler.
pub mod search;
