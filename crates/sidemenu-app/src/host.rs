//! Host and status bar that log instead of rendering.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use sidemenu_common::types::{ContentId, LayoutDirection, Region};
use sidemenu_config::StatusBarBehavior;
use sidemenu_controller::{PanelFrames, PanelHost, SpringAnimation, StatusBar, TransitionId};
use tracing::{debug, info};

/// Transitions scheduled on the host and not yet reported back.
pub type PendingTransitions = Rc<RefCell<Vec<TransitionId>>>;

pub struct LoggingHost {
    pub layout: LayoutDirection,
    pub pending: PendingTransitions,
}

impl PanelHost for LoggingHost {
    fn attach(&mut self, content: ContentId, region: Region) {
        info!(%content, ?region, "attach");
    }

    fn detach(&mut self, content: ContentId) {
        info!(%content, "detach");
    }

    fn bring_to_front(&mut self, region: Region) {
        debug!(?region, "bring to front");
    }

    fn set_frames(&mut self, frames: PanelFrames) {
        debug!(
            menu_x = frames.menu.x,
            content_x = frames.content.x,
            overlay_alpha = frames.overlay_alpha,
            "set frames"
        );
    }

    fn animate_frames(&mut self, id: TransitionId, frames: PanelFrames, spring: SpringAnimation) {
        info!(
            id = id.0,
            menu_x = frames.menu.x,
            content_x = frames.content.x,
            duration_ms = spring.duration.as_millis() as u64,
            damping = spring.damping_ratio,
            "animate frames"
        );
        self.pending.borrow_mut().push(id);
    }

    fn fade_content(&mut self, id: TransitionId, from: ContentId, to: ContentId, duration: Duration) {
        info!(id = id.0, %from, %to, duration_ms = duration.as_millis() as u64, "fade content");
        self.pending.borrow_mut().push(id);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        debug!(visible, "overlay");
    }

    fn set_input_blocked(&mut self, blocked: bool) {
        debug!(blocked, "input blocked");
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.layout
    }
}

#[derive(Debug, Default)]
pub struct LoggingStatusBar {
    hidden: bool,
}

impl StatusBar for LoggingStatusBar {
    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool, behavior: StatusBarBehavior, animated: bool) {
        info!(hidden, ?behavior, animated, "status bar");
        self.hidden = hidden;
    }

    fn show_placeholder(&mut self) -> bool {
        debug!("status bar placeholder shown");
        true
    }

    fn remove_placeholder(&mut self) {
        debug!("status bar placeholder removed");
    }
}
