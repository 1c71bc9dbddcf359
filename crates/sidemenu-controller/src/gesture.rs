//! Pan gesture admission and end-of-drag decisions.
//!
//! Everything here is a pure function of the touch target, the gesture
//! velocity and the current menu state, so it can be exercised without a
//! live gesture system.

use serde::{Deserialize, Serialize};
use sidemenu_common::types::Vector;
use sidemenu_config::MenuDirection;

/// Maximum |vy / vx| for a pan to count as horizontal.
pub const MAX_VERTICAL_RATIO: f64 = 0.25;
/// Fraction of the menu width a closed menu must be dragged open to open.
pub const OPEN_THRESHOLD: f64 = 0.15;
/// Fraction of the menu width an open menu must be dragged closed to close.
pub const CLOSE_THRESHOLD: f64 = 0.85;

/// What kind of element the touch landed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TouchTargetKind {
    Plain,
    Slider,
    ScrollView { frame_width: f64, content_width: f64 },
}

/// Capabilities of the element under a touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchTarget {
    pub kind: TouchTargetKind,
    /// Index of the owning screen in a navigation stack, if it lives in one.
    /// `Some(0)` is the root screen.
    pub navigation_depth: Option<usize>,
}

impl TouchTarget {
    pub fn plain() -> Self {
        Self {
            kind: TouchTargetKind::Plain,
            navigation_depth: None,
        }
    }

    pub fn with_kind(kind: TouchTargetKind) -> Self {
        Self {
            kind,
            navigation_depth: None,
        }
    }

    pub fn in_navigation_stack(mut self, depth: usize) -> Self {
        self.navigation_depth = Some(depth);
        self
    }

    fn scrolls_horizontally(&self) -> bool {
        matches!(
            self.kind,
            TouchTargetKind::ScrollView { frame_width, content_width } if content_width > frame_width
        )
    }
}

/// Phases of a physical pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PanPhase {
    Began,
    /// Cumulative horizontal translation since the gesture began.
    Changed { translation_x: f64 },
    Ended,
    Cancelled,
    Failed,
}

/// Whether the pan recognizer should receive a touch on `target`.
pub fn should_receive_touch(pan_enabled: bool, target: &TouchTarget) -> bool {
    if !pan_enabled {
        return false;
    }
    if matches!(target.navigation_depth, Some(depth) if depth > 0) {
        return false;
    }
    if target.kind == TouchTargetKind::Slider {
        return false;
    }
    !target.scrolls_horizontally()
}

/// Whether a pan starting with `velocity` may begin.
///
/// Once the menu is open any direction is accepted so it can be closed
/// from any angle. `configured` is the direction from the configuration,
/// `reversed` whether the host layout flipped it.
pub fn should_begin_pan(
    velocity: Vector,
    is_open: bool,
    configured: MenuDirection,
    reversed: bool,
) -> bool {
    if is_open {
        return true;
    }
    let mut factor = configured.factor();
    if reversed {
        factor = -factor;
    }
    if velocity.x * factor <= 0.0 {
        return false;
    }
    (velocity.y / velocity.x).abs() < MAX_VERTICAL_RATIO
}

/// Final visibility after a drag.
///
/// `offset_percent` is how far the panel moved towards the opposite state,
/// as a fraction of the menu width.
pub fn settle_visibility(was_open: bool, offset_percent: f64) -> bool {
    if was_open {
        offset_percent <= CLOSE_THRESHOLD
    } else {
        offset_percent > OPEN_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_menu_needs_fifteen_percent_to_open() {
        assert!(!settle_visibility(false, 0.10));
        assert!(settle_visibility(false, 0.20));
        assert!(!settle_visibility(false, OPEN_THRESHOLD));
    }

    #[test]
    fn open_menu_needs_eighty_five_percent_to_close() {
        assert!(settle_visibility(true, 0.80));
        assert!(!settle_visibility(true, 0.90));
        assert!(settle_visibility(true, CLOSE_THRESHOLD));
    }

    #[test]
    fn rejects_when_pan_disabled() {
        assert!(!should_receive_touch(false, &TouchTarget::plain()));
        assert!(should_receive_touch(true, &TouchTarget::plain()));
    }

    #[test]
    fn rejects_wide_scroll_views() {
        let wide = TouchTarget::with_kind(TouchTargetKind::ScrollView {
            frame_width: 375.0,
            content_width: 900.0,
        });
        assert!(!should_receive_touch(true, &wide));
        assert!(!should_receive_touch(false, &wide));

        let narrow = TouchTarget::with_kind(TouchTargetKind::ScrollView {
            frame_width: 375.0,
            content_width: 375.0,
        });
        assert!(should_receive_touch(true, &narrow));
    }

    #[test]
    fn rejects_sliders() {
        let slider = TouchTarget::with_kind(TouchTargetKind::Slider);
        assert!(!should_receive_touch(true, &slider));
    }

    #[test]
    fn rejects_pushed_navigation_screens() {
        let root = TouchTarget::plain().in_navigation_stack(0);
        let pushed = TouchTarget::plain().in_navigation_stack(2);
        assert!(should_receive_touch(true, &root));
        assert!(!should_receive_touch(true, &pushed));
    }

    #[test]
    fn begin_requires_horizontal_velocity_towards_opening() {
        let right = Vector::new(400.0, 20.0);
        let left = Vector::new(-400.0, 20.0);
        assert!(should_begin_pan(right, false, MenuDirection::Left, false));
        assert!(!should_begin_pan(left, false, MenuDirection::Left, false));
        assert!(should_begin_pan(left, false, MenuDirection::Right, false));
    }

    #[test]
    fn begin_rejects_mostly_vertical_velocity() {
        let steep = Vector::new(100.0, 40.0);
        assert!(!should_begin_pan(steep, false, MenuDirection::Left, false));
        let zero = Vector::new(0.0, 0.0);
        assert!(!should_begin_pan(zero, false, MenuDirection::Left, false));
    }

    #[test]
    fn begin_honors_language_reversal() {
        let left = Vector::new(-300.0, 0.0);
        assert!(should_begin_pan(left, false, MenuDirection::Left, true));
    }

    #[test]
    fn begin_accepts_any_velocity_when_open() {
        let vertical = Vector::new(0.0, 500.0);
        assert!(should_begin_pan(vertical, true, MenuDirection::Left, false));
    }
}
