//! Turning a provider and query words into a URL and handing it to the OS.

use std::io;

use crate::config::Provider;
use crate::error::WebsError;
use crate::registry::Registry;

/// Hands URLs to something that can show them.
pub trait Launcher {
    /// Opens `url` without waiting for the application to finish.
    fn open(&self, url: &str) -> Result<(), WebsError>;
}

/// Opens URLs in the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), WebsError> {
        webbrowser::open(url).map_err(|source: io::Error| WebsError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Builds the search URL for `provider` from the full argument list.
///
/// For the default provider every argument is part of the query. For any
/// other provider `args[0]` is its flag and is left out.
pub fn build_url(provider: &Provider, args: &[String]) -> String {
    let query = if provider.entry.is_default() {
        args.join(" ")
    } else {
        args.get(1..).unwrap_or_default().join(" ")
    };

    format!("{}{query}", provider.entry.url)
}

/// Picks the provider for `args` and builds its URL.
///
/// `args[0]` selects a provider by flag; if it matches none, the default
/// provider searches for the whole argument list.
pub fn resolve_url(registry: &Registry, args: &[String]) -> Result<String, WebsError> {
    let provider = args
        .first()
        .and_then(|token| registry.resolve_by_token(token))
        .or_else(|| registry.default_provider())
        .ok_or(WebsError::MissingDefault)?;

    Ok(build_url(provider, args))
}
