//! Collaborator interfaces the controller drives.
//!
//! The controller never touches a UI toolkit directly. It tells a
//! [`PanelHost`] what to attach, where to put the panels and what to
//! animate, and it asks a [`StatusBar`] to hide or show itself.

mod fade;
pub mod noop;

pub use fade::FadeAnimator;

use serde::{Deserialize, Serialize};
use sidemenu_common::types::{ContentId, LayoutDirection, Region};
use sidemenu_config::StatusBarBehavior;
use std::time::Duration;

use crate::geometry::PanelFrames;

/// Identifies one scheduled transition. Hosts hand it back to
/// `SideMenuController::complete_transition` when the animation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionId(pub u64);

/// Spring timing for menu open/hide animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAnimation {
    pub duration: Duration,
    pub damping_ratio: f64,
    pub initial_velocity: f64,
}

/// View-hosting side of the container.
pub trait PanelHost {
    /// Load `content` into `region`. Content attached to [`Region::Content`]
    /// must sit below the shadow overlay.
    fn attach(&mut self, content: ContentId, region: Region);

    fn detach(&mut self, content: ContentId);

    fn bring_to_front(&mut self, _region: Region) {}

    /// Apply frames immediately.
    fn set_frames(&mut self, frames: PanelFrames);

    /// Animate to `frames`, then report `id` back to the controller.
    fn animate_frames(&mut self, id: TransitionId, frames: PanelFrames, spring: SpringAnimation);

    /// Cross-fade from one content to another, then report `id` back.
    fn fade_content(&mut self, id: TransitionId, from: ContentId, to: ContentId, duration: Duration);

    fn set_overlay_visible(&mut self, _visible: bool) {}

    /// Suppress (or restore) all user input while a transition runs.
    fn set_input_blocked(&mut self, _blocked: bool) {}

    fn begin_menu_appearance(&mut self, _appearing: bool, _animated: bool) {}

    fn end_menu_appearance(&mut self) {}

    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::LeftToRight
    }
}

/// Status bar control, keyed off the configured [`StatusBarBehavior`].
pub trait StatusBar {
    fn is_hidden(&self) -> bool;

    fn set_hidden(&mut self, hidden: bool, behavior: StatusBarBehavior, animated: bool);

    /// Put a screenshot of the status bar where the real one was.
    /// Returns `false` if no placeholder could be produced.
    fn show_placeholder(&mut self) -> bool {
        false
    }

    fn remove_placeholder(&mut self) {}
}

/// Describes a content swap handed to a [`TransitionAnimator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionContext {
    pub id: TransitionId,
    pub from: ContentId,
    pub to: ContentId,
    pub animated: bool,
    pub interactive: bool,
}

/// Whether an animator finished synchronously or will be completed later
/// through `SideMenuController::complete_transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProgress {
    Pending,
    Finished,
}

/// Custom animation for swapping content panels.
pub trait TransitionAnimator {
    fn animate_transition(
        &mut self,
        context: &TransitionContext,
        host: &mut dyn PanelHost,
    ) -> TransitionProgress;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_id_equality() {
        assert_eq!(TransitionId(1), TransitionId(1));
        assert_ne!(TransitionId(1), TransitionId(2));
    }

    #[test]
    fn transition_id_serialization() {
        let id = TransitionId(9);
        let json = serde_json::to_string(&id).unwrap();
        let back: TransitionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
