//! No-op collaborators for headless use.

use sidemenu_common::types::{ContentId, Region};
use sidemenu_config::StatusBarBehavior;
use std::time::Duration;

use super::{PanelHost, SpringAnimation, StatusBar, TransitionId};
use crate::geometry::PanelFrames;

/// Host that renders nothing. Animations never complete on their own;
/// callers drive `complete_transition` themselves.
pub struct NoopHost;

impl PanelHost for NoopHost {
    fn attach(&mut self, _content: ContentId, _region: Region) {}

    fn detach(&mut self, _content: ContentId) {}

    fn set_frames(&mut self, _frames: PanelFrames) {}

    fn animate_frames(&mut self, _id: TransitionId, _frames: PanelFrames, _spring: SpringAnimation) {
    }

    fn fade_content(
        &mut self,
        _id: TransitionId,
        _from: ContentId,
        _to: ContentId,
        _duration: Duration,
    ) {
    }
}

/// Status bar that only remembers whether it was asked to hide.
#[derive(Debug, Default)]
pub struct NoopStatusBar {
    hidden: bool,
}

impl StatusBar for NoopStatusBar {
    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool, _behavior: StatusBarBehavior, _animated: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_status_bar_tracks_hidden() {
        let mut bar = NoopStatusBar::default();
        assert!(!bar.is_hidden());
        bar.set_hidden(true, StatusBarBehavior::Fade, true);
        assert!(bar.is_hidden());
        assert!(!bar.show_placeholder());
    }
}
