//! Terminal styling.
//!
//! The report is plain sequential text; all visual decisions live in
//! [`MusterTheme`], which has a `plain()` variant for non-TTY output.

pub mod theme;

pub use theme::{should_use_colors, MusterTheme};
