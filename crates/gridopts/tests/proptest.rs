//! Property-based tests for option strings using proptest.

use gridopts::{OptionsState, ViewRect, MAX_CELL_SIZE, MIN_CELL_SIZE, VIEW_EXTENT};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn view_strategy() -> impl Strategy<Value = ViewRect> {
    (0i32..200, 0i32..200, -50i32..200, -50i32..200)
        .prop_map(|(width, height, pan_x, pan_y)| ViewRect::new(width, height, pan_x, pan_y))
}

/// Strings built from the characters option strings use, plus some noise.
fn option_body_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9~.:!-]{0,24}"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Size plus pan never exceeds the extent, and lands exactly on it when
    /// the candidate overshot.
    #[test]
    fn set_view_keeps_pan_in_bounds(candidate in view_strategy()) {
        let mut options = OptionsState::new();
        options.set_view(candidate);
        let view = options.view();

        prop_assert_eq!(view.width, candidate.width);
        prop_assert_eq!(view.height, candidate.height);
        prop_assert!(view.width + view.pan_x <= VIEW_EXTENT);
        prop_assert!(view.height + view.pan_y <= VIEW_EXTENT);

        if candidate.width + candidate.pan_x > VIEW_EXTENT {
            prop_assert_eq!(view.width + view.pan_x, VIEW_EXTENT);
        } else {
            prop_assert_eq!(view.pan_x, candidate.pan_x);
        }
        if candidate.height + candidate.pan_y > VIEW_EXTENT {
            prop_assert_eq!(view.height + view.pan_y, VIEW_EXTENT);
        } else {
            prop_assert_eq!(view.pan_y, candidate.pan_y);
        }
    }

    /// Cell size always lands in range; in-range values pass through.
    #[test]
    fn cell_size_is_clamped(n in 0u32..100_000) {
        let mut options = OptionsState::new();
        options.apply_option_string(&format!("@C{}", n));

        let size = options.cell_size();
        prop_assert!((MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&size));
        if (MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&n) {
            prop_assert_eq!(size, n);
        }
    }

    /// Non-negative zoom directives give min(value, 3).
    #[test]
    fn zoom_directive_caps_at_three(whole in 0u32..10, frac in 0u32..1000) {
        let literal = format!("{}.{:03}", whole, frac);
        let expected: f64 = literal.parse().unwrap();

        let input = format!("@{}", literal);

        let mut options = OptionsState::new();
        prop_assert!(options.apply_option_string(&input));
        prop_assert_eq!(options.zoom(), expected.min(3.0));
    }

    /// Percent values up to 100 map onto 0..=1.
    #[test]
    fn grid_opacity_percent(n in 0u32..=100) {
        let mut options = OptionsState::new();
        options.apply_option_string(&format!("@H{}", n));
        prop_assert_eq!(options.grid_opacity(), f64::from(n) / 100.0);
    }

    /// Applying the same string twice leaves the same state as applying it once.
    #[test]
    fn reapplying_is_idempotent(body in option_body_strategy()) {
        let input = format!("@{}", body);
        let mut options = OptionsState::new();

        let first = options.apply_option_string(&input);
        let once = options.snapshot();
        let second = options.apply_option_string(&input);

        prop_assert_eq!(first, second);
        prop_assert_eq!(options.snapshot(), once);
    }

    /// Without the sigil nothing changes.
    #[test]
    fn missing_sigil_never_mutates(body in "[A-Za-z0-9~.:]{0,24}") {
        let mut options = OptionsState::new();
        let before = options.snapshot();

        prop_assert!(!options.apply_option_string(&body));
        prop_assert_eq!(options.snapshot(), before);
    }

    /// Derived sizes follow from cell size, zoom and view.
    #[test]
    fn derived_sizes_are_consistent(
        cells in 20u32..=200,
        zoom in 0u32..4,
        view in view_strategy(),
    ) {
        let mut options = OptionsState::new();
        options.set_view(view);
        options.apply_option_string(&format!("@{}C{}", zoom, cells));

        let cell_px = options.cell_size_px();
        prop_assert_eq!(cell_px, f64::from(cells) * f64::from(zoom).min(3.0));
        prop_assert_eq!(options.width_px(), f64::from(view.width) * cell_px);
        prop_assert_eq!(options.canvas_width(), options.width_px() + 2.0 * cell_px);
        prop_assert_eq!(options.canvas_height(), options.height_px() + 2.0 * cell_px);
    }
}
