//! View rectangle and background image placement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Percent bound shared by size and pan on each axis.
pub const VIEW_EXTENT: i32 = 100;

/// The visible part of the map, in cells, with pan as a percent offset.
///
/// `width + pan_x` and `height + pan_y` never exceed [`VIEW_EXTENT`] once the
/// rectangle has gone through [`ViewRect::clamped`] (which
/// [`OptionsState::set_view`](crate::OptionsState::set_view) always does).
///
/// Parses from `WxH` or `WxH+X+Y`:
///
/// ```rust
/// use gridopts::ViewRect;
///
/// let view: ViewRect = "20x15+5+0".parse().unwrap();
/// assert_eq!(view, ViewRect::new(20, 15, 5, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRect {
    pub width: i32,
    pub height: i32,
    pub pan_x: i32,
    pub pan_y: i32,
}

impl ViewRect {
    pub const fn new(width: i32, height: i32, pan_x: i32, pan_y: i32) -> Self {
        ViewRect {
            width,
            height,
            pan_x,
            pan_y,
        }
    }

    /// Pulls pan back so that size plus pan is at most [`VIEW_EXTENT`] on each
    /// axis. Sizes are never changed.
    pub fn clamped(self) -> Self {
        let mut view = self;
        if i64::from(view.width) + i64::from(view.pan_x) > i64::from(VIEW_EXTENT) {
            view.pan_x = VIEW_EXTENT.saturating_sub(view.width);
        }
        if i64::from(view.height) + i64::from(view.pan_y) > i64::from(VIEW_EXTENT) {
            view.pan_y = VIEW_EXTENT.saturating_sub(view.height);
        }
        view
    }
}

impl Default for ViewRect {
    fn default() -> Self {
        ViewRect::new(10, 10, 0, 0)
    }
}

impl fmt::Display for ViewRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.pan_x, self.pan_y
        )
    }
}

impl FromStr for ViewRect {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let number = |part: &str, what: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| OptionsError::invalid_view(input, format!("{} is not a number", what)))
        };

        let mut parts = input.split('+');
        let size = parts.next().unwrap_or_default();
        let (w, h) = size
            .split_once(|c| c == 'x' || c == 'X')
            .ok_or_else(|| OptionsError::invalid_view(input, "expected WxH or WxH+X+Y"))?;
        let width = number(w, "width")?;
        let height = number(h, "height")?;

        let pan: Vec<&str> = parts.collect();
        let (pan_x, pan_y) = match pan.as_slice() {
            [] => (0, 0),
            [x, y] => (number(x, "pan x")?, number(y, "pan y")?),
            _ => {
                return Err(OptionsError::invalid_view(
                    input,
                    "pan needs both X and Y offsets",
                ))
            }
        };

        Ok(ViewRect::new(width, height, pan_x, pan_y))
    }
}

/// Placement of the optional background image.
///
/// The image reference is attached by the host; option strings only move and
/// scale it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub image: Option<String>,
    pub offset_x: i32,
    pub offset_y: i32,
    pub zoom: f64,
}

impl Default for BackgroundImage {
    fn default() -> Self {
        BackgroundImage {
            image: None,
            offset_x: 0,
            offset_y: 0,
            zoom: 1.0,
        }
    }
}
