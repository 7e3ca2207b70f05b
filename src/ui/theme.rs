//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! returns the plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "USAGE:", "Available providers:")
    pub fn header<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.bold()))
    }

    /// Style for primary values (e.g., URLs, file paths)
    pub fn value<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info
    pub fn secondary<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.dimmed()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.red().bold()))
    }

    /// Style for commands (e.g., "--list", "--generate-config")
    pub fn command<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.green()))
    }
}

fn paint<T: Display>(text: &T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(text)
    }
}
