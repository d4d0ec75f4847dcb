//! The option state record and its derived measurements.
//!
//! [`OptionsState`] accumulates option strings: every call to
//! [`apply_option_string`](OptionsState::apply_option_string) writes the
//! fields its tokens name and leaves the rest alone, so settings from
//! separate calls stack up. Only rebuilding the state resets it.
//!
//! ```rust
//! use gridopts::OptionsState;
//!
//! let mut options = OptionsState::new();
//! assert!(options.apply_option_string("@1.5C80D"));
//! assert!(options.apply_option_string("@H50"));
//!
//! assert_eq!(options.zoom(), 1.5);
//! assert_eq!(options.cell_size(), 80);
//! assert!(options.dark_mode());
//! assert_eq!(options.grid_opacity(), 0.5);
//! assert_eq!(options.cell_size_px(), 120.0);
//! ```

use std::fmt;
use std::num::IntErrorKind;

use crate::colour::Colour;
use crate::error::ColourError;
use crate::palette::{ColourResolver, Palette};
use crate::snapshot::Snapshot;
use crate::token::{self, leading_decimal, Token, SIGIL};
use crate::tones::Tones;
use crate::view::{BackgroundImage, ViewRect};

/// Upper bound for zoom. There is no lower bound.
pub const MAX_ZOOM: f64 = 3.0;
/// Smallest cell edge in pixels at zoom 1.
pub const MIN_CELL_SIZE: u32 = 20;
/// Largest cell edge in pixels at zoom 1.
pub const MAX_CELL_SIZE: u32 = 200;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_CELL_SIZE: u32 = 40;
pub const DEFAULT_GRID_OPACITY: f64 = 0.5;
pub const DEFAULT_EDGE_OPACITY: f64 = 0.6;
pub const DEFAULT_FONT: &str = "AzoSans";
pub const ALT_FONT: &str = "FleischWurst";
pub const DEFAULT_SCALE: &str = "5ft";

/// Grid opacity written by `H` without a value.
const FAINT_GRID_OPACITY: f64 = 0.25;
/// Grid opacity written alongside a grid colour. Note the scale: this is 100,
/// not 1.0, and callers rendering it must account for that.
const USER_GRID_OPACITY: f64 = 100.0;

/// What a call to [`OptionsState::apply_with_report`] recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// The input started with `@`.
    pub sigil: bool,
    /// A leading zoom directive was found and applied.
    pub zoom_directive: bool,
    /// Tokens that were applied.
    pub tokens_applied: usize,
    /// Tokens that matched but carried a payload that could not be used.
    pub tokens_skipped: usize,
}

impl ApplyReport {
    /// Number of tokens the scan matched, used or not.
    pub fn tokens_matched(&self) -> usize {
        self.tokens_applied + self.tokens_skipped
    }

    /// Whether the input counted as an option string: a zoom directive or at
    /// least one matched token.
    pub fn applied(&self) -> bool {
        self.zoom_directive || self.tokens_matched() > 0
    }
}

/// Why a matched token left its field unchanged.
#[derive(Debug)]
enum Skip {
    NotANumber,
    Colour(ColourError),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::NotANumber => write!(f, "payload is not a number"),
            Skip::Colour(err) => write!(f, "{}", err),
        }
    }
}

/// Display configuration for a grid view.
///
/// The resolver turns colour tokens into colours; the tones supply the
/// mode-dependent defaults for grid lines and canvas.
#[derive(Debug, Clone)]
pub struct OptionsState<R = Palette> {
    view: ViewRect,
    background: BackgroundImage,
    zoom: f64,
    cell_size: u32,
    dark_mode: bool,
    grid_opacity: f64,
    grid_colour: Colour,
    is_grid_user_colour: bool,
    edge_opacity: f64,
    background_colour: Colour,
    is_background_user_colour: bool,
    font: String,
    scale: String,
    tones: Tones,
    resolver: R,
}

impl OptionsState<Palette> {
    /// Default state with the built-in palette and tones.
    pub fn new() -> Self {
        Self::with_parts(Tones::default(), Palette)
    }
}

impl Default for OptionsState<Palette> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ColourResolver> OptionsState<R> {
    /// Default state using the given tones and colour resolver.
    pub fn with_parts(tones: Tones, resolver: R) -> Self {
        OptionsState {
            view: ViewRect::default(),
            background: BackgroundImage::default(),
            zoom: DEFAULT_ZOOM,
            cell_size: DEFAULT_CELL_SIZE,
            dark_mode: false,
            grid_opacity: DEFAULT_GRID_OPACITY,
            grid_colour: tones.light,
            is_grid_user_colour: false,
            edge_opacity: DEFAULT_EDGE_OPACITY,
            background_colour: tones.dark,
            is_background_user_colour: false,
            font: DEFAULT_FONT.to_string(),
            scale: DEFAULT_SCALE.to_string(),
            tones,
            resolver,
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replaces the view, pulling pan back so size plus pan stays within 100.
    pub fn set_view(&mut self, view: ViewRect) {
        self.view = view.clamped();
    }

    /// Attaches or clears the background image reference.
    pub fn set_background_image(&mut self, image: Option<String>) {
        self.background.image = image;
    }

    /// Merges an option string into the state.
    ///
    /// Returns `false` without touching anything when `raw` does not start
    /// with `@`. Otherwise applies the leading zoom directive, if any, and
    /// every token in source order, returning whether anything matched.
    pub fn apply_option_string(&mut self, raw: &str) -> bool {
        self.apply_with_report(raw).applied()
    }

    /// Like [`apply_option_string`](Self::apply_option_string), but reports
    /// what was recognised.
    pub fn apply_with_report(&mut self, raw: &str) -> ApplyReport {
        let mut report = ApplyReport::default();
        if !raw.starts_with(SIGIL) {
            tracing::debug!(input = raw, "not an option string: missing sigil");
            return report;
        }
        report.sigil = true;

        if let Some(zoom) = token::zoom_directive(raw) {
            self.zoom = zoom.min(MAX_ZOOM);
            report.zoom_directive = true;
        }

        for token in token::tokenize(raw) {
            match self.apply_token(token) {
                Ok(()) => {
                    tracing::trace!(letter = %token.letter(), ?token, "applied option token");
                    report.tokens_applied += 1;
                }
                Err(skip) => {
                    tracing::debug!(
                        letter = %token.letter(),
                        ?token,
                        reason = %skip,
                        "skipped option token"
                    );
                    report.tokens_skipped += 1;
                }
            }
        }

        report
    }

    fn apply_token(&mut self, token: Token<'_>) -> Result<(), Skip> {
        match token {
            Token::GridColour(name) => {
                self.grid_colour = self.resolver.resolve(name).map_err(Skip::Colour)?;
                self.is_grid_user_colour = true;
                self.grid_opacity = USER_GRID_OPACITY;
            }
            Token::BackgroundColour(name) => {
                self.background_colour = self.resolver.resolve(name).map_err(Skip::Colour)?;
                self.is_background_user_colour = true;
            }
            Token::DarkMode => self.dark_mode = true,
            Token::FullEdges => self.edge_opacity = 1.0,
            Token::AltFont => self.font = ALT_FONT.to_string(),
            Token::HideGrid => self.grid_opacity = 0.0,
            Token::CellSize(digits) => {
                let size = match digits.parse::<u64>() {
                    Ok(n) => n,
                    Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
                    Err(_) => return Err(Skip::NotANumber),
                };
                let clamped = size.clamp(u64::from(MIN_CELL_SIZE), u64::from(MAX_CELL_SIZE));
                self.cell_size = u32::try_from(clamped).map_err(|_| Skip::NotANumber)?;
            }
            Token::GridOpacity("") => self.grid_opacity = FAINT_GRID_OPACITY,
            Token::GridOpacity(digits) => {
                let percent: f64 = digits.parse().map_err(|_| Skip::NotANumber)?;
                self.grid_opacity = if percent <= 100.0 { percent / 100.0 } else { 1.0 };
            }
            Token::BackgroundZoom(payload) => {
                self.background.zoom = leading_decimal(payload).ok_or(Skip::NotANumber)?;
            }
            Token::Zoom(payload) => {
                self.zoom = leading_decimal(payload).ok_or(Skip::NotANumber)?.min(MAX_ZOOM);
            }
            Token::BackgroundOffset(x, y) => {
                let x = x.parse().map_err(|_| Skip::NotANumber)?;
                let y = y.parse().map_err(|_| Skip::NotANumber)?;
                self.background.offset_x = x;
                self.background.offset_y = y;
            }
            Token::Scale(scale) => self.scale = scale.to_string(),
        }
        Ok(())
    }

    // =========================================================================
    // Fields
    // =========================================================================

    pub fn view(&self) -> ViewRect {
        self.view
    }

    pub fn background(&self) -> &BackgroundImage {
        &self.background
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Cell edge in pixels at zoom 1.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Grid line opacity. Normally 0..=1, but 100 after a grid colour token.
    pub fn grid_opacity(&self) -> f64 {
        self.grid_opacity
    }

    pub fn grid_colour(&self) -> Colour {
        self.grid_colour
    }

    pub fn is_grid_user_colour(&self) -> bool {
        self.is_grid_user_colour
    }

    pub fn edge_opacity(&self) -> f64 {
        self.edge_opacity
    }

    pub fn background_colour(&self) -> Colour {
        self.background_colour
    }

    pub fn is_background_user_colour(&self) -> bool {
        self.is_background_user_colour
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    /// Measurement scale, e.g. `5ft` or `3m`, as written.
    pub fn scale(&self) -> &str {
        &self.scale
    }

    pub fn tones(&self) -> Tones {
        self.tones
    }

    // =========================================================================
    // Derived measurements
    // =========================================================================

    /// Cell edge in pixels at the current zoom.
    pub fn cell_size_px(&self) -> f64 {
        f64::from(self.cell_size) * self.zoom
    }

    pub fn width_px(&self) -> f64 {
        f64::from(self.view.width) * self.cell_size_px()
    }

    pub fn height_px(&self) -> f64 {
        f64::from(self.view.height) * self.cell_size_px()
    }

    /// View width plus one cell of margin on each side.
    pub fn canvas_width(&self) -> f64 {
        self.width_px() + 2.0 * self.cell_size_px()
    }

    /// View height plus one cell of margin on each side.
    pub fn canvas_height(&self) -> f64 {
        self.height_px() + 2.0 * self.cell_size_px()
    }

    /// Grid line colour: the user's grid colour, or the tone contrasting with
    /// the current mode.
    pub fn fg(&self) -> Colour {
        if self.is_grid_user_colour {
            self.grid_colour
        } else {
            self.tones.foreground(self.dark_mode)
        }
    }

    /// Canvas colour: the user's background colour, or the tone matching the
    /// current mode.
    pub fn bg(&self) -> Colour {
        if self.is_background_user_colour {
            self.background_colour
        } else {
            self.tones.background(self.dark_mode)
        }
    }

    /// Captures every field and derived measurement.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view: self.view,
            background: self.background.clone(),
            zoom: self.zoom,
            cell_size: self.cell_size,
            dark_mode: self.dark_mode,
            grid_opacity: self.grid_opacity,
            grid_colour: self.grid_colour,
            is_grid_user_colour: self.is_grid_user_colour,
            edge_opacity: self.edge_opacity,
            background_colour: self.background_colour,
            is_background_user_colour: self.is_background_user_colour,
            font: self.font.clone(),
            scale: self.scale.clone(),
            cell_size_px: self.cell_size_px(),
            width_px: self.width_px(),
            height_px: self.height_px(),
            canvas_width: self.canvas_width(),
            canvas_height: self.canvas_height(),
            fg: self.fg(),
            bg: self.bg(),
        }
    }
}
