//! Open, close and toggle the menu, and settle animated transitions.

use tracing::{debug, warn};

use crate::commands::SideMenuCommand;
use crate::host::{SpringAnimation, TransitionId};

use super::{MenuTransition, SideMenuController, VisibilityCompletion};

impl SideMenuController {
    /// Reveal the menu.
    ///
    /// Already open (and not mid-drag) is a no-op that still reports `true`.
    pub fn open(&mut self, animated: bool, on_complete: Option<VisibilityCompletion>) {
        self.request_visibility(true, animated, on_complete);
    }

    /// Hide the menu.
    pub fn close(&mut self, animated: bool, on_complete: Option<VisibilityCompletion>) {
        self.request_visibility(false, animated, on_complete);
    }

    /// Flip towards the opposite of the state the menu is heading to.
    pub fn toggle(&mut self, animated: bool) {
        let target = !self.target_visibility();
        self.request_visibility(target, animated, None);
    }

    /// Dispatch a command. Returns `true` if it changed anything.
    pub fn execute(&mut self, cmd: SideMenuCommand) -> bool {
        match cmd {
            SideMenuCommand::Open => {
                let changed = !self.target_visibility();
                self.open(true, None);
                changed
            }
            SideMenuCommand::Close => {
                let changed = self.target_visibility();
                self.close(true, None);
                changed
            }
            SideMenuCommand::Toggle => {
                self.toggle(true);
                true
            }
            SideMenuCommand::ShowContent(identifier) => {
                let previous = self.content;
                match self.try_set_content_with(&identifier, true, None) {
                    Ok(()) => previous != self.content || self.content_transition.is_some(),
                    Err(e) => {
                        warn!(error = %e, "cannot show content");
                        false
                    }
                }
            }
        }
    }

    /// Report that the host finished animating transition `id`.
    ///
    /// Reports for transitions that were already superseded are ignored.
    pub fn complete_transition(&mut self, id: TransitionId, finished: bool) {
        if self.menu_transition.as_ref().is_some_and(|t| t.id == id) {
            if let Some(transition) = self.menu_transition.take() {
                self.finish_menu_transition(transition, finished);
            }
        } else if self.content_transition.as_ref().is_some_and(|t| t.id == id) {
            if let Some(transition) = self.content_transition.take() {
                self.finish_content_transition(transition);
            }
        } else {
            debug!(id = id.0, "ignoring stale transition completion");
        }
    }

    /// Visibility the menu is at or animating towards.
    pub(super) fn target_visibility(&self) -> bool {
        self.menu_transition
            .as_ref()
            .map_or(self.is_open, |t| t.visible)
    }

    fn request_visibility(
        &mut self,
        visible: bool,
        animated: bool,
        on_complete: Option<VisibilityCompletion>,
    ) {
        if self.drag.is_none() && self.target_visibility() == visible {
            debug!(visible, "menu already in requested state");
            if let Some(done) = on_complete {
                done(true);
            }
            return;
        }

        if !self.loaded {
            debug!(visible, "controller not loaded, recording visibility");
            self.is_open = visible;
            if let Some(done) = on_complete {
                done(true);
            }
            return;
        }

        self.drag = None;
        self.change_visibility(visible, animated, true, true, on_complete);
    }

    /// Move both panels to their resting frames for `visible`.
    ///
    /// `notify` gates the will/did delegate calls, `change_status_bar` the
    /// status bar update.
    pub(super) fn change_visibility(
        &mut self,
        visible: bool,
        animated: bool,
        notify: bool,
        change_status_bar: bool,
        on_complete: Option<VisibilityCompletion>,
    ) {
        self.supersede_menu_transition();

        self.host.begin_menu_appearance(visible, animated);
        if notify {
            self.delegate.will_change_menu(visible);
        }
        if visible {
            self.show_overlay(true);
        }

        let frames = self.geometry().frames(visible, self.shadow_alpha());
        let transition = MenuTransition {
            id: self.allocate_transition(),
            visible,
            animated,
            notify,
            change_status_bar,
            completion: on_complete,
        };

        if !animated {
            if change_status_bar {
                self.set_status_bar_hidden(visible, false);
            }
            self.apply_frames(frames);
            self.finish_menu_transition(transition, true);
            return;
        }

        let behavior = self.config.status_bar_behavior;
        if change_status_bar {
            if behavior.animates_with_menu() {
                self.set_status_bar_hidden(visible, true);
            } else if visible {
                self.set_status_bar_hidden(true, false);
            }
        }

        let spring = SpringAnimation {
            duration: self.config.animation.duration(visible),
            damping_ratio: self.config.animation.damping_ratio,
            initial_velocity: self.config.animation.initial_spring_velocity,
        };
        let id = transition.id;
        debug!(id = id.0, visible, "animating menu");
        self.frames = frames;
        self.menu_transition = Some(transition);
        self.host.set_input_blocked(true);
        self.host.animate_frames(id, frames, spring);
    }

    /// Cut a running open/close short so a newer one can start.
    pub(super) fn supersede_menu_transition(&mut self) {
        if let Some(transition) = self.menu_transition.take() {
            debug!(id = transition.id.0, "superseding menu transition");
            // Snap the host to the end frames of the cut-short animation.
            self.host.set_frames(self.frames);
            self.finish_menu_transition(transition, false);
        }
    }

    fn finish_menu_transition(&mut self, transition: MenuTransition, finished: bool) {
        self.host.end_menu_appearance();
        if transition.notify {
            self.delegate.did_change_menu(transition.visible);
        }
        if !transition.visible {
            self.show_overlay(false);
            if transition.animated
                && transition.change_status_bar
                && !self.config.status_bar_behavior.animates_with_menu()
            {
                self.set_status_bar_hidden(false, false);
            }
        }
        self.is_open = transition.visible;
        if transition.animated {
            self.host.set_input_blocked(false);
        }
        debug!(visible = transition.visible, finished, "menu transition finished");
        if let Some(done) = transition.completion {
            done(finished);
        }
    }
}
