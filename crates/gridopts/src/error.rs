//! Error types for the gridopts crate.
//!
//! Applying an option string never fails: malformed tokens are skipped and
//! reported through [`ApplyReport`](crate::ApplyReport). These errors cover the
//! typed entry points around it (colour literals, view descriptions, tones
//! configuration).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning a colour token into a [`Colour`](crate::Colour).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourError {
    /// Hex literal with the wrong length or non-hex digits.
    #[error("invalid hex colour: #{0} (must be 3 or 6 hex digits)")]
    InvalidHex(String),

    /// Token is not one of the palette mnemonics.
    #[error("unknown colour mnemonic: {0}")]
    UnknownMnemonic(String),
}

/// Errors that can occur when building option state from typed inputs.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// A colour could not be resolved.
    #[error(transparent)]
    Colour(#[from] ColourError),

    /// A view description such as `10x8+5+0` could not be parsed.
    #[error("invalid view '{input}': {reason}")]
    InvalidView { input: String, reason: String },

    /// Tones configuration is not valid YAML or has the wrong shape.
    #[error("invalid tones configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Reading a configuration file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OptionsError {
    /// Create an invalid view error.
    pub fn invalid_view(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidView {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for gridopts operations.
pub type Result<T> = std::result::Result<T, OptionsError>;
