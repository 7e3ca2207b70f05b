use anyhow::Result;

use crate::config::ConfigStore;
use crate::status;
use crate::ui::Style;

/// Replaces the config file with the built-in providers.
pub fn run(store: &ConfigStore) -> Result<()> {
    store.reset()?;

    status!(
        "{} Generated config file {}",
        Style::success("✓"),
        Style::value(store.path().display())
    );

    Ok(())
}
