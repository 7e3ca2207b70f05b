//! Terminal styling.

mod theme;

pub use theme::Style;
