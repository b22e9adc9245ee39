//! Theme context for the renderers
//!
//! A single `ThemeProvider` is created when the dashboard starts and handed to
//! every renderer by reference. It is dropped with the dashboard.

use prettytable::format::{self, TableFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Colour scheme of the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, plain borders
    Light,
    /// Dark background, box-drawing borders
    #[default]
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Rendering parameters of this theme
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                table_format: *format::consts::FORMAT_NO_LINESEP_WITH_TITLE,
                chart_point: '*',
                chart_fill: ' ',
                pinned_marker: "*",
                rule: '-',
            },
            Theme::Dark => Palette {
                table_format: *format::consts::FORMAT_BOX_CHARS,
                chart_point: '●',
                chart_fill: '·',
                pinned_marker: "★",
                rule: '═',
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Glyphs and table layout derived from a theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// prettytable layout for grids
    pub table_format: TableFormat,
    /// Glyph of a chart sample
    pub chart_point: char,
    /// Glyph below a chart sample
    pub chart_fill: char,
    /// Marker of the pinned coin
    pub pinned_marker: &'static str,
    /// Horizontal rule glyph
    pub rule: char,
}

impl Palette {
    /// Horizontal rule of the given width
    #[must_use]
    pub fn rule(&self, width: usize) -> String {
        std::iter::repeat_n(self.rule, width).collect()
    }
}

/// Owner of the active theme, passed down to renderers
#[derive(Debug)]
pub struct ThemeProvider {
    theme: Theme,
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeProvider {
    /// Creates the provider with an initial theme
    pub fn new(theme: Theme) -> Self {
        debug!("Theme provider created ({})", theme);
        Self { theme }
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Active palette
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flips between light and dark and returns the new theme
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {}", self.theme);
        self.theme
    }
}

impl Drop for ThemeProvider {
    fn drop(&mut self) {
        debug!("Theme provider released");
    }
}
