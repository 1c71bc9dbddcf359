//! Menu placement and status bar behavior types.

use serde::{Deserialize, Serialize};

/// How the menu panel visually relates to the content panel when open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum MenuPosition {
    /// The menu slides in over the content.
    #[default]
    Above,
    /// The content slides away to reveal the menu beneath it.
    Under,
    /// Both panels slide together.
    SideBySide,
}

/// Edge of the container the menu is revealed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum MenuDirection {
    #[default]
    Left,
    Right,
}

impl MenuDirection {
    pub fn reversed(self) -> Self {
        match self {
            MenuDirection::Left => MenuDirection::Right,
            MenuDirection::Right => MenuDirection::Left,
        }
    }

    /// Sign of the horizontal axis pointing towards "more open".
    pub fn factor(self) -> f64 {
        match self {
            MenuDirection::Left => 1.0,
            MenuDirection::Right => -1.0,
        }
    }
}

/// What happens to the status bar while the menu is revealed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum StatusBarBehavior {
    #[default]
    None,
    Slide,
    Fade,
    /// Hide the real status bar and show a screenshot placeholder in its
    /// place, so the content layout does not shift.
    HideOnMenu,
}

impl StatusBarBehavior {
    /// Whether status bar changes are folded into the menu animation.
    pub fn animates_with_menu(self) -> bool {
        self != StatusBarBehavior::HideOnMenu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_reversal() {
        assert_eq!(MenuDirection::Left.reversed(), MenuDirection::Right);
        assert_eq!(MenuDirection::Right.reversed(), MenuDirection::Left);
    }

    #[test]
    fn direction_factor() {
        assert_eq!(MenuDirection::Left.factor(), 1.0);
        assert_eq!(MenuDirection::Right.factor(), -1.0);
    }

    #[test]
    fn position_serializes_snake_case() {
        let json = serde_json::to_string(&MenuPosition::SideBySide).unwrap();
        assert_eq!(json, "\"side_by_side\"");
    }

    #[test]
    fn status_bar_behavior_parses() {
        let b: StatusBarBehavior = serde_json::from_str("\"hide_on_menu\"").unwrap();
        assert_eq!(b, StatusBarBehavior::HideOnMenu);
        assert!(!b.animates_with_menu());
        assert!(StatusBarBehavior::Fade.animates_with_menu());
    }
}
