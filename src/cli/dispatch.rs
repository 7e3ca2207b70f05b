use anyhow::Result;
use std::io::Write;

use super::commands::{generate_config, help, list, search};
use crate::config::ConfigStore;
use crate::error::WebsError;
use crate::opener::Launcher;
use crate::registry::Registry;
use crate::status;
use crate::ui::Style;

/// What a command line asks for, decided from its first token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `--generate-config`
    GenerateConfig,
    /// `--list`
    List,
    /// `-h` or `--help`
    Help,
    /// Anything else: an optional provider flag plus the search string.
    Search(Vec<String>),
    /// No tokens at all.
    MissingSearchString,
}

/// Classifies the arguments that follow the program name.
pub fn classify(args: &[String]) -> Action {
    match args.first().map(String::as_str) {
        None => Action::MissingSearchString,
        Some("--generate-config") => Action::GenerateConfig,
        Some("--list") => Action::List,
        Some("-h" | "--help") => Action::Help,
        Some(_) => Action::Search(args.to_vec()),
    }
}

/// Runs one invocation.
///
/// Seeds the config file if it is missing, then handles the action for
/// `args`. Lists and usage text go to `out`; searches go to `launcher`.
pub fn run(
    args: &[String],
    store: &ConfigStore,
    launcher: &impl Launcher,
    out: &mut impl Write,
) -> Result<()> {
    if store.ensure()? {
        status!(
            "{} Created config file {}",
            Style::success("✓"),
            Style::value(store.path().display())
        );
    }

    // Only a reset skips loading, so it still works when the file no longer parses
    let load = || -> Result<Registry> { Ok(Registry::new(store.load()?)?) };

    match classify(args) {
        Action::GenerateConfig => generate_config::run(store)?,
        Action::List => list::run(out, &load()?)?,
        Action::Help => help::run(out, &load()?)?,
        Action::Search(args) => search::run(&load()?, &args, launcher)?,
        Action::MissingSearchString => {
            help::run(out, &load()?)?;
            return Err(WebsError::NoSearchString.into());
        }
    }

    Ok(())
}
