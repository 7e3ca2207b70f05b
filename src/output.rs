//! Global output configuration and utilities.
//!
//! - Provider lists and usage text go to stdout
//! - Status messages ("Opening ...", "Generated ...") go to stderr
//! - Errors always go to stderr
//! - `WEB_S_QUIET` suppresses status messages
//! - `NO_COLOR` disables styling (<https://no-color.org/>)

use std::sync::OnceLock;

/// Environment variable that enables quiet mode.
pub const QUIET_ENV: &str = "WEB_S_QUIET";

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress status messages.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: std::env::var_os(QUIET_ENV).is_some(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Initialize the global output configuration.
///
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Plain, quiet output for unit tests that render text.
#[cfg(test)]
pub(crate) fn init_for_tests() {
    init(OutputConfig {
        quiet: true,
        no_color: true,
    });
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}
