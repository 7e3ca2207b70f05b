//! In-memory provider lookup built from the loaded config.

use crate::config::{ConfigMapping, Provider};
use crate::error::WebsError;

/// Providers available for this invocation, in config file order.
#[derive(Debug, Clone)]
pub struct Registry {
    providers: Vec<Provider>,
}

impl Registry {
    /// Builds the registry, rejecting configs with more than one default
    /// provider.
    pub fn new(mapping: ConfigMapping) -> Result<Self, WebsError> {
        let defaults: Vec<String> = mapping
            .providers()
            .iter()
            .filter(|p| p.entry.is_default())
            .map(|p| p.name.clone())
            .collect();
        if defaults.len() > 1 {
            return Err(WebsError::MultipleDefaults { names: defaults });
        }

        Ok(Self {
            providers: mapping.into_providers(),
        })
    }

    /// Finds the provider whose `-<shortHand>` or `--<name>` equals `token`.
    ///
    /// When two providers share a flag the first one in file order wins.
    pub fn resolve_by_token(&self, token: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.matches(token))
    }

    /// The provider marked with `shortHand: "default"`, if any.
    pub fn default_provider(&self) -> Option<&Provider> {
        self.providers.iter().find(|p| p.entry.is_default())
    }

    /// One display line per provider, each prefixed with `indent`.
    pub fn list_lines(&self, indent: &str) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| {
                if p.entry.is_default() {
                    format!("{indent}{} (default)", p.name)
                } else {
                    format!("{indent}{}: {}/{}", p.name, p.short_flag(), p.long_flag())
                }
            })
            .collect()
    }
}
