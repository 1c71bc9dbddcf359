//! Optional notification slots for side menu events.
//!
//! Every slot may be left empty; an empty slot is skipped.

use sidemenu_common::types::ContentId;

use crate::host::TransitionAnimator;

/// Called with the content being shown and whether the swap is animated.
pub type ShowCallback = Box<dyn FnMut(ContentId, bool)>;
pub type MenuCallback = Box<dyn FnMut()>;
/// Supplies a custom animator for swapping `from` to `to`, or `None` for the default fade.
pub type AnimatorFactory = Box<dyn FnMut(ContentId, ContentId) -> Option<Box<dyn TransitionAnimator>>>;

#[derive(Default)]
pub struct SideMenuDelegate {
    pub will_show: Option<ShowCallback>,
    pub did_show: Option<ShowCallback>,
    pub will_open_menu: Option<MenuCallback>,
    pub did_open_menu: Option<MenuCallback>,
    pub will_hide_menu: Option<MenuCallback>,
    pub did_hide_menu: Option<MenuCallback>,
    pub animator_for: Option<AnimatorFactory>,
}

impl SideMenuDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_will_show(mut self, f: impl FnMut(ContentId, bool) + 'static) -> Self {
        self.will_show = Some(Box::new(f));
        self
    }

    pub fn on_did_show(mut self, f: impl FnMut(ContentId, bool) + 'static) -> Self {
        self.did_show = Some(Box::new(f));
        self
    }

    pub fn on_will_open_menu(mut self, f: impl FnMut() + 'static) -> Self {
        self.will_open_menu = Some(Box::new(f));
        self
    }

    pub fn on_did_open_menu(mut self, f: impl FnMut() + 'static) -> Self {
        self.did_open_menu = Some(Box::new(f));
        self
    }

    pub fn on_will_hide_menu(mut self, f: impl FnMut() + 'static) -> Self {
        self.will_hide_menu = Some(Box::new(f));
        self
    }

    pub fn on_did_hide_menu(mut self, f: impl FnMut() + 'static) -> Self {
        self.did_hide_menu = Some(Box::new(f));
        self
    }

    pub fn with_animator(
        mut self,
        f: impl FnMut(ContentId, ContentId) -> Option<Box<dyn TransitionAnimator>> + 'static,
    ) -> Self {
        self.animator_for = Some(Box::new(f));
        self
    }

    pub(crate) fn will_show(&mut self, content: ContentId, animated: bool) {
        if let Some(cb) = self.will_show.as_mut() {
            cb(content, animated);
        }
    }

    pub(crate) fn did_show(&mut self, content: ContentId, animated: bool) {
        if let Some(cb) = self.did_show.as_mut() {
            cb(content, animated);
        }
    }

    /// `will_open_menu` or `will_hide_menu`, depending on `visible`.
    pub(crate) fn will_change_menu(&mut self, visible: bool) {
        let slot = if visible {
            self.will_open_menu.as_mut()
        } else {
            self.will_hide_menu.as_mut()
        };
        if let Some(cb) = slot {
            cb();
        }
    }

    pub(crate) fn did_change_menu(&mut self, visible: bool) {
        let slot = if visible {
            self.did_open_menu.as_mut()
        } else {
            self.did_hide_menu.as_mut()
        };
        if let Some(cb) = slot {
            cb();
        }
    }

    pub(crate) fn animator(
        &mut self,
        from: ContentId,
        to: ContentId,
    ) -> Option<Box<dyn TransitionAnimator>> {
        self.animator_for.as_mut().and_then(|f| f(from, to))
    }
}
