//! Colour token resolution.
//!
//! Colour tokens in option strings are either a short mnemonic (`PK`, `R`,
//! `GY`, ...) or a hex literal prefixed with `~` (`~ff8800`, `~f80`). The
//! state never interprets them itself: it hands the token to a
//! [`ColourResolver`] and stores what comes back.
//!
//! [`Palette`] is the built-in resolver. Any `Fn(&str) -> Result<Colour, ColourError>`
//! is a resolver too, which keeps tests and embedders free to plug in their own
//! table.

use crate::colour::Colour;
use crate::error::ColourError;

/// Turns a colour token into a concrete colour.
pub trait ColourResolver {
    /// Resolves `token` (the text after the directive letter, e.g. `PK` or `~fff`).
    fn resolve(&self, token: &str) -> Result<Colour, ColourError>;
}

impl<F> ColourResolver for F
where
    F: Fn(&str) -> Result<Colour, ColourError>,
{
    fn resolve(&self, token: &str) -> Result<Colour, ColourError> {
        self(token)
    }
}

/// Mnemonic table. Two-letter entries come first so they read the same way
/// the tokenizer matches them.
const MNEMONICS: &[(&str, Colour)] = &[
    ("PK", Colour::rgb(250, 190, 212)), // pink
    ("PU", Colour::rgb(145, 30, 180)),  // purple
    ("BK", Colour::rgb(0, 0, 0)),       // black
    ("GY", Colour::rgb(128, 128, 128)), // grey
    ("BN", Colour::rgb(154, 99, 36)),   // brown
    ("W", Colour::rgb(255, 255, 255)),  // white
    ("K", Colour::rgb(60, 60, 60)),     // charcoal
    ("E", Colour::rgb(192, 192, 192)),  // light grey
    ("A", Colour::rgb(255, 191, 0)),    // amber
    ("R", Colour::rgb(230, 25, 75)),    // red
    ("G", Colour::rgb(60, 180, 75)),    // green
    ("B", Colour::rgb(67, 99, 216)),    // blue
    ("Y", Colour::rgb(255, 225, 25)),   // yellow
    ("P", Colour::rgb(221, 160, 221)),  // plum
    ("C", Colour::rgb(66, 212, 244)),   // cyan
    ("N", Colour::rgb(0, 0, 117)),      // navy
    ("O", Colour::rgb(245, 130, 49)),   // orange
    ("I", Colour::rgb(75, 0, 130)),     // indigo
];

/// The built-in mnemonic palette with `~hex` passthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette;

impl Palette {
    /// Looks up a mnemonic, ignoring case.
    pub fn lookup(mnemonic: &str) -> Option<Colour> {
        MNEMONICS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(mnemonic))
            .map(|(_, colour)| *colour)
    }

    /// All known mnemonics, in table order.
    pub fn mnemonics() -> impl Iterator<Item = &'static str> {
        MNEMONICS.iter().map(|(name, _)| *name)
    }
}

impl ColourResolver for Palette {
    fn resolve(&self, token: &str) -> Result<Colour, ColourError> {
        if let Some(hex) = token.strip_prefix('~') {
            return Colour::from_hex(hex);
        }
        Palette::lookup(token).ok_or_else(|| ColourError::UnknownMnemonic(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mnemonics() {
        assert_eq!(Palette.resolve("PK").unwrap(), Colour(250, 190, 212));
        assert_eq!(Palette.resolve("W").unwrap(), Colour(255, 255, 255));
        assert_eq!(Palette.resolve("BK").unwrap(), Colour(0, 0, 0));
    }

    #[test]
    fn test_resolve_case_insensitive() {
        assert_eq!(Palette.resolve("pk").unwrap(), Palette.resolve("PK").unwrap());
        assert_eq!(Palette.resolve("gY").unwrap(), Colour(128, 128, 128));
    }

    #[test]
    fn test_resolve_hex_passthrough() {
        assert_eq!(Palette.resolve("~ff8800").unwrap(), Colour(255, 136, 0));
        assert_eq!(Palette.resolve("~F80").unwrap(), Colour(255, 136, 0));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            Palette.resolve("ZZ"),
            Err(ColourError::UnknownMnemonic("ZZ".into()))
        );
        assert!(matches!(
            Palette.resolve("~ff"),
            Err(ColourError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_every_mnemonic_resolves() {
        for name in Palette::mnemonics() {
            assert!(Palette.resolve(name).is_ok(), "{} should resolve", name);
        }
        assert_eq!(Palette::mnemonics().count(), 18);
    }

    #[test]
    fn test_closure_resolver() {
        let fixed = |_: &str| -> Result<Colour, ColourError> { Ok(Colour(1, 2, 3)) };
        assert_eq!(fixed.resolve("anything").unwrap(), Colour(1, 2, 3));
    }
}
