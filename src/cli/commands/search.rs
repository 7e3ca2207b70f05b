use anyhow::Result;

use crate::opener::{Launcher, resolve_url};
use crate::registry::Registry;
use crate::status;
use crate::ui::Style;

/// Resolves the provider for `args` and opens the search in the browser.
pub fn run(registry: &Registry, args: &[String], launcher: &impl Launcher) -> Result<()> {
    let url = resolve_url(registry, args)?;

    status!("Opening {}", Style::value(&url));
    launcher.open(&url)?;

    Ok(())
}
