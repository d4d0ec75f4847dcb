//! The light/dark colour pair used when no user colour is set.
//!
//! Grid lines and canvas background contrast automatically with the current
//! mode: in light mode the canvas is the light tone and lines are the dark
//! tone, and dark mode swaps them. A user colour supplied through an option
//! string overrides either side.
//!
//! Tones are plain values injected into [`OptionsState`](crate::OptionsState),
//! so a host can theme them without touching the parser. They load from YAML:
//!
//! ```rust
//! use gridopts::{Colour, Tones};
//!
//! let tones = Tones::from_yaml("light: '#ffffff'\ndark: '#000000'\n").unwrap();
//! assert_eq!(tones.light, Colour(255, 255, 255));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::{OptionsError, Result};

/// Powdered sugar.
pub const LIGHT_TONE: Colour = Colour::rgb(0xf4, 0xf6, 0xff);
/// Midnight blue.
pub const DARK_TONE: Colour = Colour::rgb(0x07, 0x03, 0x1a);

/// Light and dark tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tones {
    pub light: Colour,
    pub dark: Colour,
}

impl Tones {
    pub const DEFAULT: Tones = Tones {
        light: LIGHT_TONE,
        dark: DARK_TONE,
    };

    /// Creates a tone pair.
    pub const fn new(light: Colour, dark: Colour) -> Self {
        Tones { light, dark }
    }

    /// Parses tones from a YAML mapping with `light` and `dark` keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML tones file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Colour for grid lines when the user has not chosen one.
    pub fn foreground(&self, dark_mode: bool) -> Colour {
        if dark_mode {
            self.light
        } else {
            self.dark
        }
    }

    /// Colour for the canvas when the user has not chosen one.
    pub fn background(&self, dark_mode: bool) -> Colour {
        if dark_mode {
            self.dark
        } else {
            self.light
        }
    }
}

impl Default for Tones {
    fn default() -> Self {
        Tones::DEFAULT
    }
}
