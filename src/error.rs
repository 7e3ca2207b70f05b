//! Error kinds surfaced by web-s and their process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading configuration, resolving providers, or
/// launching the browser.
#[derive(Debug, Error)]
pub enum WebsError {
    /// The home directory could not be determined.
    #[error("Unable to determine home directory")]
    NoHomeDir,

    /// The config file exists but could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not a valid provider mapping.
    #[error(
        "Failed to parse config file {}: {source}\n\n\
         Fix the file by hand or run 'web-s --generate-config' to restore the defaults \
         (this discards your changes)",
        .path.display()
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file could not be written.
    #[error("Failed to write config file {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The old config file could not be removed during a reset.
    #[error("Failed to remove config file {}: {source}", .path.display())]
    ConfigRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No flag matched and no provider is marked as the default.
    #[error(
        "No default provider configured\n\n\
         Mark one provider with \"shortHand\": \"default\" or run 'web-s --generate-config'"
    )]
    MissingDefault,

    /// More than one provider is marked as the default.
    #[error("Multiple default providers configured: {}", .names.join(", "))]
    MultipleDefaults { names: Vec<String> },

    /// No arguments were given.
    #[error("No searchstring")]
    NoSearchString,

    /// The OS refused to open the URL.
    #[error("Failed to open {url} in the default browser: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl WebsError {
    /// Sysexits-style exit code for this error.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::NoHomeDir => exitcode::OSERR,
            Self::ConfigRead { .. } => exitcode::IOERR,
            Self::ConfigParse { .. } | Self::MissingDefault | Self::MultipleDefaults { .. } => {
                exitcode::CONFIG
            }
            Self::ConfigWrite { .. } | Self::ConfigRemove { .. } => exitcode::CANTCREAT,
            Self::NoSearchString => exitcode::USAGE,
            Self::Launch { .. } => exitcode::UNAVAILABLE,
        }
    }
}

/// Maps any error bubbling out of `main` to an exit code.
///
/// Errors that carry a [`WebsError`] anywhere in their chain use its code;
/// everything else is treated as an internal failure.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<WebsError>())
        .map_or(exitcode::SOFTWARE, WebsError::exit_code)
}
