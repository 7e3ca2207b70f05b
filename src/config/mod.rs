//! Provider configuration: the on-disk mapping and the store that owns it.

/// Provider mapping types and their JSON representation.
pub mod mapping;

/// The built-in provider set written on first run and on reset.
pub mod sample;

/// Loading, seeding, and resetting the config file.
pub mod store;

pub use mapping::{ConfigMapping, DEFAULT_SHORT_HAND, Provider, ProviderEntry};
pub use sample::sample_mapping;
pub use store::ConfigStore;
