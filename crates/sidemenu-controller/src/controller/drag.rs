//! Interactive dragging of the moving panel.

use sidemenu_common::types::Vector;
use tracing::{debug, trace};

use crate::gesture::{self, PanPhase, TouchTarget};

use super::{DragState, SideMenuController};

impl SideMenuController {
    /// Whether a touch on `target` may start a menu pan.
    pub fn should_receive_touch(&self, target: &TouchTarget) -> bool {
        gesture::should_receive_touch(self.config.enable_pan_gesture, target)
    }

    /// Whether a pan with initial `velocity` may begin.
    pub fn should_begin_pan(&self, velocity: Vector) -> bool {
        let reversed = self.adjusted_direction != self.config.direction;
        gesture::should_begin_pan(velocity, self.is_open, self.config.direction, reversed)
    }

    /// Route a pan gesture phase to the drag operations.
    pub fn handle_pan(&mut self, phase: PanPhase) {
        match phase {
            PanPhase::Began => self.begin_drag(),
            PanPhase::Changed { translation_x } => self.update_drag(translation_x),
            PanPhase::Ended | PanPhase::Cancelled | PanPhase::Failed => self.end_drag(),
        }
    }

    /// Start a drag from wherever the moving panel currently is.
    pub fn begin_drag(&mut self) {
        let start = self.geometry().dragged_offset(&self.frames);
        self.begin_drag_at(start);
    }

    /// Start a drag with the moving panel at `start_offset_x`.
    pub fn begin_drag_at(&mut self, start_offset_x: f64) {
        if !self.loaded {
            return;
        }
        self.supersede_menu_transition();
        debug!(start_offset_x, "drag began");
        self.drag = Some(DragState {
            start_x: start_offset_x,
            was_open: self.is_open,
            moved: false,
        });
    }

    /// Move the dragged panel by `translation_x` from where the drag began.
    pub fn update_drag(&mut self, translation_x: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        let geometry = self.geometry();
        let offset = geometry.drag_offset(
            drag.start_x,
            translation_x,
            self.config.enable_rubber_effect,
        );

        if !drag.moved {
            if offset == geometry.dragged_offset(&self.frames) {
                return;
            }
            self.drag = Some(DragState {
                moved: true,
                ..drag
            });
            self.set_status_bar_hidden(true, true);
            self.show_overlay(true);
        }

        trace!(offset, "drag moved");
        let frames = geometry.frames_at(offset, self.shadow_alpha());
        self.apply_frames(frames);
    }

    /// Release the drag and settle on open or closed.
    pub fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let geometry = self.geometry();
        let progress = geometry.progress(geometry.dragged_offset(&self.frames));
        let offset_percent = if drag.was_open {
            1.0 - progress
        } else {
            progress
        };
        let visible = gesture::settle_visibility(drag.was_open, offset_percent);
        debug!(offset_percent, visible, "drag ended");

        let changed = visible != drag.was_open;
        // Closing always restores the status bar hidden by the drag.
        let change_status_bar = changed || !visible;
        self.change_visibility(visible, true, changed, change_status_bar, None);
    }
}
