//! # gridopts - Option strings for grid and map views
//!
//! `gridopts` decodes compact, hand-writable option strings such as
//! `@1.5C80DQPK` into a display configuration for a grid view, and derives the
//! measurements a renderer needs from it (cell and canvas sizes in pixels,
//! grid line and canvas colours).
//!
//! ## Core Concepts
//!
//! - [`OptionsState`]: the configuration record. Option strings are merged
//!   into it one after another; later values win.
//! - [`ViewRect`]: the visible area in cells, with pan kept inside 100%.
//! - [`ColourResolver`]: turns colour tokens into [`Colour`]s. [`Palette`] is
//!   the built-in mnemonic table.
//! - [`Tones`]: the light/dark pair used when the user hasn't set colours.
//! - [`token`]: the tokenizer, for callers that want the raw directives.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridopts::{OptionsState, ViewRect};
//!
//! let mut options = OptionsState::new();
//! options.set_view(ViewRect::new(20, 15, 0, 0));
//!
//! assert!(options.apply_option_string("@2C30D"));
//! assert!(!options.apply_option_string("not options"));
//!
//! assert_eq!(options.cell_size_px(), 60.0);
//! assert_eq!(options.canvas_width(), 20.0 * 60.0 + 2.0 * 60.0);
//! assert_eq!(options.bg(), options.tones().dark);
//! ```
//!
//! ## Option Strings
//!
//! | Directive | Effect | Token |
//! |-----------|--------|-------|
//! | `@<n>` (leading) | zoom, capped at 3 | [`zoom_directive`](token::zoom_directive) |
//! | `Q<colour>` | grid colour (also sets grid opacity to 100) | [`GridColour`](token::Token::GridColour) |
//! | `G<colour>` | background colour | [`BackgroundColour`](token::Token::BackgroundColour) |
//! | `D` | dark mode | [`DarkMode`](token::Token::DarkMode) |
//! | `E` | full edge opacity | [`FullEdges`](token::Token::FullEdges) |
//! | `F` | alternate font | [`AltFont`](token::Token::AltFont) |
//! | `N` | hide grid | [`HideGrid`](token::Token::HideGrid) |
//! | `C<n>` | cell size, clamped to 20..=200 | [`CellSize`](token::Token::CellSize) |
//! | `H<n>` | grid opacity percent; bare `H` is 25% | [`GridOpacity`](token::Token::GridOpacity) |
//! | `B<n>` | background image zoom (decimal) | [`BackgroundZoom`](token::Token::BackgroundZoom) |
//! | `Z<n>` | zoom (decimal), capped at 3 | [`Zoom`](token::Token::Zoom) |
//! | `O<x>:<y>` | background image offset | [`BackgroundOffset`](token::Token::BackgroundOffset) |
//! | `S<n>ft` / `S<n>m` | measurement scale, 1-2 digits | [`Scale`](token::Token::Scale) |
//!
//! Colours are mnemonics (`R`, `PK`, `GY`, ...) or `~` hex (`~ff8800`,
//! `~f80`). Unrecognised characters are ignored, and a token whose number
//! does not parse is skipped without affecting the others.

mod colour;
mod error;
mod palette;
mod snapshot;
mod state;
pub mod token;
mod tones;
mod view;

pub use colour::Colour;
pub use error::{ColourError, OptionsError, Result};
pub use palette::{ColourResolver, Palette};
pub use snapshot::Snapshot;
pub use state::{
    ApplyReport, OptionsState, ALT_FONT, DEFAULT_CELL_SIZE, DEFAULT_EDGE_OPACITY, DEFAULT_FONT,
    DEFAULT_GRID_OPACITY, DEFAULT_SCALE, DEFAULT_ZOOM, MAX_CELL_SIZE, MAX_ZOOM, MIN_CELL_SIZE,
};
pub use tones::{Tones, DARK_TONE, LIGHT_TONE};
pub use view::{BackgroundImage, ViewRect, VIEW_EXTENT};
