//! # web-s - Web Search Shortcuts
//!
//! `web-s` opens a search in the default browser, picking the search engine
//! from a short flag.
//!
//! ## Quick Start
//!
//! ```bash
//! # Search with the default provider
//! web-s rust lifetimes
//!
//! # Search reddit
//! web-s -r mechanical keyboards
//! web-s --reddit mechanical keyboards
//!
//! # Show the configured providers
//! web-s --list
//! ```
//!
//! ## Configuration
//!
//! Providers live in `~/.web-s.conf`, created with a sample set on first run:
//!
//! ```json
//! {
//!   "google": {
//!     "url": "https://www.google.com/search?q=",
//!     "shortHand": "default"
//!   },
//!   "reddit": {
//!     "url": "https://www.reddit.com/search?q=",
//!     "shortHand": "r"
//!   }
//! }
//! ```
//!
//! `web-s --generate-config` replaces the file with the sample set again,
//! discarding any edits.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Config file loading, seeding, and reset.
pub mod config;

/// Error kinds and exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// URL building and the browser launcher.
pub mod opener;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// Config file location.
pub mod paths;

/// Provider lookup by flag.
pub mod registry;

/// Terminal styling.
pub mod ui;

/// Usage and provider list rendering.
pub mod usage;
