//! # Output Configuration
//!
//! Controls how the CLI renders component trees and status lines: whether
//! colors and emoji are used, and how a component is labelled.
//!
//! Color is decided once from the `--color` flag:
//! - `always` forces colors on (overrides `NO_COLOR`)
//! - `never` forces colors off
//! - `auto` disables colors when `NO_COLOR` is set, `TERM=dumb`, or stdout
//!   is not a color-capable terminal

use std::env;

use console::style;

use crate::component::Component;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve the `--color` flag (`always`, `never`, `auto`) against the
    /// environment and apply it to the `console` crate.
    pub fn from_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        console::set_colors_enabled(use_color);
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Pick the emoji when colors are enabled, the plain marker otherwise.
    pub fn emoji<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// One-line label for a resolved component, e.g.
    /// `web [git https://example.com/web.git]`.
    pub fn component_label(&self, component: &Component) -> String {
        let name = if component.name.is_empty() {
            component.logical_path.as_str()
        } else {
            component.name.as_str()
        };

        let acquisition = match (component.method.as_str(), component.source.as_str()) {
            (_, "") => None,
            ("", source) => Some(source.to_string()),
            (method, source) => Some(format!("{} {}", method, source)),
        };

        let name = if self.use_color {
            style(name).bold().to_string()
        } else {
            name.to_string()
        };

        match acquisition {
            Some(acquisition) if self.use_color => {
                format!("{} {}", name, style(format!("[{}]", acquisition)).dim())
            }
            Some(acquisition) => format!("{} [{}]", name, acquisition),
            None => name,
        }
    }
}
