use anyhow::{Context, Result};
use std::io::Write;

use crate::registry::Registry;
use crate::usage;

/// Prints usage followed by the indented provider list.
pub fn run(out: &mut impl Write, registry: &Registry) -> Result<()> {
    usage::print_usage(out, registry).context("Failed to write usage")
}
