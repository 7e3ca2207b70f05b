use anyhow::{Context, Result};
use std::io::Write;

use crate::registry::Registry;
use crate::usage;

/// Prints one line per provider with no indentation.
pub fn run(out: &mut impl Write, registry: &Registry) -> Result<()> {
    usage::print_providers(out, registry, "").context("Failed to write provider list")
}
