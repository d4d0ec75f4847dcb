//! Serializable capture of an [`OptionsState`](crate::OptionsState).

use serde::Serialize;

use crate::colour::Colour;
use crate::view::{BackgroundImage, ViewRect};

/// Every stored field plus the derived measurements, as of one moment.
///
/// Produced by [`OptionsState::snapshot`](crate::OptionsState::snapshot).
/// Colours serialize as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub view: ViewRect,
    pub background: BackgroundImage,
    pub zoom: f64,
    pub cell_size: u32,
    pub dark_mode: bool,
    pub grid_opacity: f64,
    pub grid_colour: Colour,
    pub is_grid_user_colour: bool,
    pub edge_opacity: f64,
    pub background_colour: Colour,
    pub is_background_user_colour: bool,
    pub font: String,
    pub scale: String,
    pub cell_size_px: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub fg: Colour,
    pub bg: Colour,
}
