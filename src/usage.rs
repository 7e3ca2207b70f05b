//! Usage and provider list output.

use std::io::{self, Write};

use crate::registry::Registry;
use crate::ui::Style;

/// First line of the usage text.
pub const USAGE_LINE: &str = "USAGE: web-s [provider] <searchstring>";

/// Commands understood in place of a provider flag.
const COMMANDS: &[(&str, &str)] = &[
    ("--list", "List available providers"),
    (
        "--generate-config",
        "Replace the config file with the built-in providers",
    ),
    ("-h, --help", "Print this help"),
    ("--version", "Print version"),
];

/// Writes the provider list, one provider per line, without styling.
pub fn print_providers(out: &mut impl Write, registry: &Registry, indent: &str) -> io::Result<()> {
    for line in registry.list_lines(indent) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Writes the usage header, the indented provider list, and the commands.
pub fn print_usage(out: &mut impl Write, registry: &Registry) -> io::Result<()> {
    writeln!(out, "{}", Style::header(USAGE_LINE))?;
    writeln!(out, "{}", Style::header("Available providers:"))?;
    print_providers(out, registry, "  ")?;

    writeln!(out)?;
    writeln!(out, "{}", Style::header("Commands:"))?;
    let width = COMMANDS.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);
    for (flag, description) in COMMANDS {
        let padding = " ".repeat(width - flag.len());
        writeln!(
            out,
            "  {}{padding}  {}",
            Style::command(flag),
            Style::secondary(description)
        )?;
    }

    Ok(())
}
