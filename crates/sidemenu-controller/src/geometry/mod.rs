//! Panel geometry: borders, resting frames, drag offsets and rubber banding.
//!
//! Three independent axes decide where the panels sit:
//! - `position`: which panel moves (menu for `above`, content otherwise)
//! - `direction`: which edge the menu comes from; `right` mirrors all signs
//! - language direction: resolved once into the effective direction

mod calculation;
mod types;

pub use calculation::{resolve_direction, rubber_band};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use sidemenu_common::types::{LayoutDirection, Rect, Region};
    use sidemenu_config::{MenuDirection, MenuPosition};

    const POSITIONS: [MenuPosition; 3] = [
        MenuPosition::Above,
        MenuPosition::Under,
        MenuPosition::SideBySide,
    ];
    const DIRECTIONS: [MenuDirection; 2] = [MenuDirection::Left, MenuDirection::Right];

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 375.0, 812.0)
    }

    fn geometry(position: MenuPosition, direction: MenuDirection) -> PanelGeometry {
        PanelGeometry::new(position, direction, 300.0, container())
    }

    #[test]
    fn open_and_closed_frames_differ_by_menu_width() {
        for position in POSITIONS {
            for direction in DIRECTIONS {
                let g = geometry(position, direction);
                let open = g.frames(true, 0.0);
                let closed = g.frames(false, 0.0);
                let open_x = g.dragged_offset(&open);
                let closed_x = g.dragged_offset(&closed);
                assert!(
                    ((open_x - closed_x).abs() - 300.0).abs() < 1e-9,
                    "{position:?}/{direction:?}"
                );
                assert!((open_x - g.open_border()).abs() < 1e-9);
                assert!((closed_x - g.closed_border()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn right_direction_mirrors_left() {
        for position in POSITIONS {
            let left = geometry(position, MenuDirection::Left).borders();
            let right = geometry(position, MenuDirection::Right).borders();
            assert_eq!(right.left, -left.right);
            assert_eq!(right.right, -left.left);
        }
    }

    #[test]
    fn above_left_borders() {
        let b = geometry(MenuPosition::Above, MenuDirection::Left).borders();
        assert_eq!(b.left, -375.0);
        assert_eq!(b.right, -75.0);
    }

    #[test]
    fn under_keeps_menu_fixed() {
        let g = geometry(MenuPosition::Under, MenuDirection::Left);
        assert_eq!(g.side_menu_frame(true), g.side_menu_frame(false));
        assert_eq!(g.content_frame(true).x, 300.0);
        assert_eq!(g.dragged_region(), Region::Content);
    }

    #[test]
    fn above_keeps_content_fixed() {
        let g = geometry(MenuPosition::Above, MenuDirection::Right);
        assert_eq!(g.content_frame(true), g.content_frame(false));
        assert_eq!(g.side_menu_frame(true).x, 75.0);
        assert_eq!(g.side_menu_frame(false).x, 375.0);
        assert_eq!(g.dragged_region(), Region::Menu);
    }

    #[test]
    fn side_by_side_menu_trails_content() {
        for direction in DIRECTIONS {
            let g = geometry(MenuPosition::SideBySide, direction);
            let frames = g.frames_at(120.0 * direction.factor(), 0.0);
            assert_eq!(
                frames.menu.x,
                frames.content.x - 375.0 * direction.factor()
            );
            // Resting frames agree with the trailing rule.
            let open = g.frames(true, 0.0);
            let dragged_open = g.frames_at(g.open_border(), 0.0);
            assert_eq!(open.menu, dragged_open.menu);
            assert_eq!(open.content, dragged_open.content);
        }
    }

    #[test]
    fn rubber_band_is_zero_at_border() {
        assert_eq!(rubber_band(0.0, 300.0), 0.0);
        let g = geometry(MenuPosition::Under, MenuDirection::Left);
        let at_border = g.drag_offset(0.0, 300.0, true);
        assert_eq!(at_border, 300.0);
    }

    #[test]
    fn rubber_band_is_monotonic_and_sub_linear() {
        let mut previous = 0.0;
        for step in 1..200 {
            let excess = step as f64 * 25.0;
            let value = rubber_band(excess, 300.0);
            assert!(value > previous);
            assert!(value < excess);
            previous = value;
        }
        // 10x the menu width past the border moves only ~half a menu width.
        let far = rubber_band(3000.0, 300.0);
        assert!((far - 300.0 * 11f64.log10() * 0.5).abs() < 1e-9);
    }

    #[test]
    fn drag_past_open_border_rubber_bands() {
        let g = geometry(MenuPosition::Under, MenuDirection::Left);
        let offset = g.drag_offset(0.0, 400.0, true);
        let expected = 300.0 + 300.0 * (100.0f64 / 300.0 + 1.0).log10() * 0.5;
        assert!((offset - expected).abs() < 1e-9);
        assert!(offset > 300.0 && offset < 400.0);
    }

    #[test]
    fn drag_past_open_border_right_direction() {
        let g = geometry(MenuPosition::Above, MenuDirection::Right);
        // Closed at 375, open at 75; drag 400 to the left.
        let offset = g.drag_offset(375.0, -400.0, true);
        assert!(offset < 75.0);
        assert!(offset > -25.0);
    }

    #[test]
    fn drag_past_open_border_without_rubber_clamps() {
        let g = geometry(MenuPosition::Above, MenuDirection::Left);
        let offset = g.drag_offset(g.closed_border(), 500.0, false);
        assert_eq!(offset, g.open_border());
    }

    #[test]
    fn drag_past_closed_border_always_clamps() {
        for rubber in [true, false] {
            let g = geometry(MenuPosition::SideBySide, MenuDirection::Left);
            assert_eq!(g.drag_offset(0.0, -80.0, rubber), 0.0);
            let g = geometry(MenuPosition::Under, MenuDirection::Right);
            assert_eq!(g.drag_offset(0.0, 80.0, rubber), 0.0);
        }
    }

    #[test]
    fn drag_within_borders_follows_finger() {
        let g = geometry(MenuPosition::Above, MenuDirection::Left);
        assert_eq!(g.drag_offset(-375.0, 150.0, true), -225.0);
    }

    #[test]
    fn progress_runs_from_closed_to_open() {
        for position in POSITIONS {
            for direction in DIRECTIONS {
                let g = geometry(position, direction);
                assert!(g.progress(g.closed_border()).abs() < 1e-9);
                assert!((g.progress(g.open_border()) - 1.0).abs() < 1e-9);
                let quarter = g.closed_border() + 75.0 * direction.factor();
                assert!((g.progress(quarter) - 0.25).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn overlay_alpha_follows_progress() {
        let g = geometry(MenuPosition::Above, MenuDirection::Left);
        let half = g.frames_at(g.closed_border() + 150.0, 0.4);
        assert!((half.overlay_alpha - 0.2).abs() < 1e-9);
        let past_open = g.frames_at(g.open_border() + 40.0, 0.4);
        assert!((past_open.overlay_alpha - 0.4).abs() < 1e-9);
    }

    #[test]
    fn rtl_layout_reverses_configured_direction() {
        assert_eq!(
            resolve_direction(MenuDirection::Left, true, LayoutDirection::RightToLeft),
            MenuDirection::Right
        );
        assert_eq!(
            resolve_direction(MenuDirection::Left, false, LayoutDirection::RightToLeft),
            MenuDirection::Left
        );
        assert_eq!(
            resolve_direction(MenuDirection::Right, true, LayoutDirection::LeftToRight),
            MenuDirection::Right
        );
    }
}
