//! Concrete colour values.
//!
//! A [`Colour`] is an opaque 24-bit RGB triplet. It prints and serializes as a
//! lowercase `#rrggbb` string and parses from `#rrggbb` or `#rgb` (the `#` is
//! optional when parsing).
//!
//! ```rust
//! use gridopts::Colour;
//!
//! let c: Colour = "#f80".parse().unwrap();
//! assert_eq!(c, Colour(255, 136, 0));
//! assert_eq!(c.to_string(), "#ff8800");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColourError;

/// A 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    /// Creates a colour from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Colour(r, g, b)
    }

    /// Parses a hex literal without its prefix.
    ///
    /// Accepts 3 digits (`f80`, each digit doubled) or 6 digits (`ff8800`),
    /// in either case.
    pub fn from_hex(hex: &str) -> Result<Self, ColourError> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColourError::InvalidHex(hex.to_string()));
        }

        let component = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColourError::InvalidHex(hex.to_string()))
        };

        match hex.len() {
            // 3-digit hex: rgb -> rrggbb
            3 => Ok(Colour(
                component(&hex[0..1])? * 17,
                component(&hex[1..2])? * 17,
                component(&hex[2..3])? * 17,
            )),
            6 => Ok(Colour(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(ColourError::InvalidHex(hex.to_string())),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Colour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Colour::from_hex(s.strip_prefix('#').unwrap_or(s))
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Colour::from_hex("ff6b35").unwrap(), Colour(255, 107, 53));
        assert_eq!(Colour::from_hex("000000").unwrap(), Colour(0, 0, 0));
        assert_eq!(Colour::from_hex("FFFFFF").unwrap(), Colour(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Colour::from_hex("fff").unwrap(), Colour(255, 255, 255));
        assert_eq!(Colour::from_hex("f80").unwrap(), Colour(255, 136, 0));
        assert_eq!(Colour::from_hex("A0c").unwrap(), Colour(170, 0, 204));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Colour::from_hex("ff").is_err());
        assert!(Colour::from_hex("ffff").is_err());
        assert!(Colour::from_hex("gggggg").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_parse_hex_rejects_sign() {
        // from_str_radix alone would accept "+f"
        assert!(Colour::from_hex("+fffff").is_err());
    }

    #[test]
    fn test_parse_hex_non_ascii() {
        assert!(Colour::from_hex("ééé").is_err());
    }

    #[test]
    fn test_from_str_with_and_without_hash() {
        assert_eq!("#07031a".parse::<Colour>().unwrap(), Colour(7, 3, 26));
        assert_eq!("07031a".parse::<Colour>().unwrap(), Colour(7, 3, 26));
        assert_eq!(" #fff ".parse::<Colour>().unwrap(), Colour(255, 255, 255));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Colour(244, 246, 255).to_string(), "#f4f6ff");
        assert_eq!(Colour::rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Colour(7, 3, 26)).unwrap();
        assert_eq!(json, "\"#07031a\"");

        let back: Colour = serde_json::from_str("\"#F4F6FF\"").unwrap();
        assert_eq!(back, Colour(244, 246, 255));

        assert!(serde_json::from_str::<Colour>("\"#nothex\"").is_err());
    }
}
