//! Option-string tokenizer.
//!
//! An option string is `@`, an optional zoom directive, then any number of
//! single-letter directives with optional payloads, as listed in the
//! [crate documentation](crate#option-strings).
//!
//! A colour is a mnemonic (`PK PU BK GY BN` or one of `WKEARGBYPCNOI`) or a
//! `~` hex literal of 6 or 3 digits. Matching is case-insensitive and scans
//! the whole string: at each position the shapes are tried in the order
//! `Q G D/E/F/N C/H B/Z O S`, and anything that matches none of them is
//! skipped.
//!
//! ```rust
//! use gridopts::token::{tokenize, Token};
//!
//! let tokens: Vec<_> = tokenize("@1.5C80dQ~f80").collect();
//! assert_eq!(
//!     tokens,
//!     vec![Token::CellSize("80"), Token::DarkMode, Token::GridColour("~f80")]
//! );
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Character every option string starts with.
pub const SIGIL: char = '@';

/// Colour payload shared by `Q` and `G`.
const COLOUR: &str = "(?:PK|PU|BK|GY|BN|[WKEARGBYPCNOI]|~[0-9A-F]{6}|~[0-9A-F]{3})";

/// Token shapes, in the order they are tried at each position.
const SHAPES: &[&str] = &[
    "Q{colour}",
    "G{colour}",
    "[DEFN]",
    "[CH][0-9]*",
    "[BZ][0-9.]*",
    "O[0-9]+:[0-9]+",
    "S[0-9]{1,2}(?:FT|M)",
];

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = SHAPES
        .iter()
        .map(|shape| shape.replace("{colour}", COLOUR))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){}", alternation)).expect("token pattern is a valid regex")
});

static ZOOM_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@(-?(?:[0-9](?:\.[0-9]{1,3})?|\.[0-9]{1,3}))")
        .expect("zoom directive pattern is a valid regex")
});

static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)").expect("decimal pattern is a valid regex")
});

/// A single recognised directive, borrowing its payload from the input.
///
/// Payloads are kept as text; numeric conversion happens when the token is
/// applied so a bad number only affects its own field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `Q<colour>`
    GridColour(&'a str),
    /// `G<colour>`
    BackgroundColour(&'a str),
    /// `D`
    DarkMode,
    /// `E`
    FullEdges,
    /// `F`
    AltFont,
    /// `N`
    HideGrid,
    /// `C<digits>`, digits possibly empty.
    CellSize(&'a str),
    /// `H<digits>`, digits possibly empty.
    GridOpacity(&'a str),
    /// `B<decimal>`, possibly empty.
    BackgroundZoom(&'a str),
    /// `Z<decimal>`, possibly empty.
    Zoom(&'a str),
    /// `O<x>:<y>`
    BackgroundOffset(&'a str, &'a str),
    /// `S<n>ft` or `S<n>m`; holds everything after the `S`.
    Scale(&'a str),
}

impl<'a> Token<'a> {
    /// Builds a token from matched text, dispatching on its first character.
    fn classify(text: &'a str) -> Option<Self> {
        let mut chars = text.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let payload = chars.as_str();

        let token = match letter {
            'Q' => Token::GridColour(payload),
            'G' => Token::BackgroundColour(payload),
            'D' => Token::DarkMode,
            'E' => Token::FullEdges,
            'F' => Token::AltFont,
            'N' => Token::HideGrid,
            'C' => Token::CellSize(payload),
            'H' => Token::GridOpacity(payload),
            'B' => Token::BackgroundZoom(payload),
            'Z' => Token::Zoom(payload),
            'O' => {
                let (x, y) = payload.split_once(':')?;
                Token::BackgroundOffset(x, y)
            }
            'S' => Token::Scale(payload),
            _ => return None,
        };
        Some(token)
    }

    /// The directive letter, uppercase.
    pub fn letter(&self) -> char {
        match self {
            Token::GridColour(_) => 'Q',
            Token::BackgroundColour(_) => 'G',
            Token::DarkMode => 'D',
            Token::FullEdges => 'E',
            Token::AltFont => 'F',
            Token::HideGrid => 'N',
            Token::CellSize(_) => 'C',
            Token::GridOpacity(_) => 'H',
            Token::BackgroundZoom(_) => 'B',
            Token::Zoom(_) => 'Z',
            Token::BackgroundOffset(..) => 'O',
            Token::Scale(_) => 'S',
        }
    }
}

/// Iterates the directives in `input`, in source order.
///
/// The sigil is not checked here; the whole string is scanned.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    TOKEN_PATTERN
        .find_iter(input)
        .filter_map(|m| Token::classify(m.as_str()))
}

/// Returns the leading zoom directive's value, if `input` starts with one.
///
/// The directive is `@` followed by an optionally signed number with a single
/// integer digit and up to three fractional digits, or a bare fraction
/// (`@2`, `@1.25`, `@.5`, `@-1`). Extra digits are left for the token scan.
pub fn zoom_directive(input: &str) -> Option<f64> {
    let caps = ZOOM_DIRECTIVE.captures(input)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Parses the longest decimal prefix of `payload` (`1.5.2` gives 1.5).
pub(crate) fn leading_decimal(payload: &str) -> Option<f64> {
    DECIMAL_PREFIX.find(payload)?.as_str().parse().ok()
}
