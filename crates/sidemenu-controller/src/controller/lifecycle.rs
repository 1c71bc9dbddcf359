//! Loading, resizing and application lifecycle handling.

use sidemenu_common::events::{EventBus, LifecycleEvent};
use sidemenu_common::types::{Rect, Region};
use sidemenu_common::ControllerError;
use sidemenu_config::MenuPosition;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::geometry::resolve_direction;

use super::SideMenuController;

impl SideMenuController {
    /// Lay out and attach both panels inside `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if the menu or content panel has not been set.
    pub fn load(&mut self, bounds: Rect) {
        if let Err(e) = self.try_load(bounds) {
            panic!("{e}");
        }
    }

    /// Fallible variant of [`load`](Self::load).
    pub fn try_load(&mut self, bounds: Rect) -> Result<(), ControllerError> {
        if self.loaded {
            debug!("controller already loaded");
            return Ok(());
        }
        let menu = self.menu.ok_or(ControllerError::MissingPanel("menu"))?;
        let content = self.content.ok_or(ControllerError::MissingPanel("content"))?;

        self.layout_direction = self.host.layout_direction();
        self.adjusted_direction = resolve_direction(
            self.config.direction,
            self.config.respect_language_direction,
            self.layout_direction,
        );
        self.container = Rect::new(0.0, 0.0, bounds.width, bounds.height);

        let frames = self.geometry().frames(self.is_open, self.shadow_alpha());
        self.apply_frames(frames);
        self.host.attach(content, Region::Content);
        self.host.attach(menu, Region::Menu);
        if self.config.position == MenuPosition::Under {
            self.host.bring_to_front(Region::Content);
        }
        if self.is_open {
            self.show_overlay(true);
        }

        self.cache
            .insert_handle(self.config.default_cache_key.clone(), content);
        self.loaded = true;
        info!(
            position = ?self.config.position,
            direction = ?self.adjusted_direction,
            width = bounds.width,
            "side menu loaded"
        );
        Ok(())
    }

    /// Re-layout for new container bounds. The menu is closed first.
    pub fn transition_to_size(&mut self, bounds: Rect) {
        self.container = Rect::new(0.0, 0.0, bounds.width, bounds.height);
        if !self.loaded {
            return;
        }
        self.drag = None;
        self.close(false, None);
        let frames = self.geometry().frames(false, self.shadow_alpha());
        self.apply_frames(frames);
        debug!(width = bounds.width, height = bounds.height, "container resized");
    }

    /// A tap on the shadow overlay closes the menu.
    pub fn tap_overlay(&mut self) {
        if self.overlay_visible {
            self.close(true, None);
        }
    }

    pub fn subscribe_lifecycle(&mut self, bus: &EventBus) {
        self.lifecycle = Some(bus.subscribe());
    }

    pub fn unsubscribe_lifecycle(&mut self) {
        self.lifecycle = None;
    }

    /// Handle every lifecycle event received since the last call.
    /// Returns the number of events handled.
    pub fn pump_lifecycle_events(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let Some(rx) = self.lifecycle.as_mut() else {
                return handled;
            };
            match rx.try_recv() {
                Ok(event) => {
                    self.handle_lifecycle_event(event);
                    handled += 1;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "lifecycle receiver lagged");
                }
                Err(TryRecvError::Empty) => return handled,
                Err(TryRecvError::Closed) => {
                    debug!("lifecycle bus closed");
                    self.lifecycle = None;
                    return handled;
                }
            }
        }
    }

    pub fn handle_lifecycle_event(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::EnteredBackground if self.config.hide_menu_on_background => {
                debug!("entered background, closing menu");
                self.close(false, None);
            }
            _ => {}
        }
    }
}
