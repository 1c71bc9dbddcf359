//! Border, frame and drag-offset calculation.

use sidemenu_common::types::{LayoutDirection, Rect};
use sidemenu_config::{MenuDirection, MenuPosition};

use super::{Borders, PanelFrames, PanelGeometry, RUBBER_BAND_FACTOR};

/// Resolve the configured direction against the host layout direction.
pub fn resolve_direction(
    configured: MenuDirection,
    respect_language_direction: bool,
    layout: LayoutDirection,
) -> MenuDirection {
    if respect_language_direction && layout == LayoutDirection::RightToLeft {
        configured.reversed()
    } else {
        configured
    }
}

/// Sub-linear distance for a drag that went `excess` points past a border.
///
/// Zero at the border and grows logarithmically with `excess`.
pub fn rubber_band(excess: f64, menu_width: f64) -> f64 {
    if excess <= 0.0 || menu_width <= 0.0 {
        return 0.0;
    }
    menu_width * (excess / menu_width + 1.0).log10() * RUBBER_BAND_FACTOR
}

impl PanelGeometry {
    fn factor(&self) -> f64 {
        self.direction.factor()
    }

    /// Travel range of the dragged panel.
    pub fn borders(&self) -> Borders {
        let m = self.menu_width;
        let w = self.container_width;
        let (left, right) = match self.position {
            MenuPosition::Above => (-w, m - w),
            MenuPosition::Under | MenuPosition::SideBySide => (0.0, m),
        };
        match self.direction {
            MenuDirection::Left => Borders { left, right },
            MenuDirection::Right => Borders {
                left: -right,
                right: -left,
            },
        }
    }

    /// Offset of the dragged panel when the menu is fully revealed.
    pub fn open_border(&self) -> f64 {
        let borders = self.borders();
        match self.direction {
            MenuDirection::Left => borders.right,
            MenuDirection::Right => borders.left,
        }
    }

    /// Offset of the dragged panel when the menu is fully hidden.
    pub fn closed_border(&self) -> f64 {
        let borders = self.borders();
        match self.direction {
            MenuDirection::Left => borders.left,
            MenuDirection::Right => borders.right,
        }
    }

    pub fn side_menu_frame(&self, visible: bool) -> Rect {
        match self.position {
            MenuPosition::Above | MenuPosition::SideBySide => {
                let x = if visible {
                    self.menu_width - self.container_width
                } else {
                    -self.container_width
                };
                self.full_frame(x * self.factor())
            }
            MenuPosition::Under => self.full_frame(0.0),
        }
    }

    pub fn content_frame(&self, visible: bool) -> Rect {
        match self.position {
            MenuPosition::Above => self.full_frame(0.0),
            MenuPosition::Under | MenuPosition::SideBySide => {
                let x = if visible {
                    self.menu_width * self.factor()
                } else {
                    0.0
                };
                self.full_frame(x)
            }
        }
    }

    /// Resting frames for a fully open or fully closed menu.
    pub fn frames(&self, visible: bool, shadow_alpha: f64) -> PanelFrames {
        PanelFrames {
            menu: self.side_menu_frame(visible),
            content: self.content_frame(visible),
            overlay_alpha: if visible { shadow_alpha } else { 0.0 },
        }
    }

    /// Frames with the dragged panel placed at `offset`.
    ///
    /// In side-by-side mode the menu trails the content by one container width.
    pub fn frames_at(&self, offset: f64, shadow_alpha: f64) -> PanelFrames {
        let (menu, content) = match self.position {
            MenuPosition::Above => (self.full_frame(offset), self.content_frame(false)),
            MenuPosition::Under => (self.side_menu_frame(false), self.full_frame(offset)),
            MenuPosition::SideBySide => (
                self.full_frame(offset - self.container_width * self.factor()),
                self.full_frame(offset),
            ),
        };
        PanelFrames {
            menu,
            content,
            overlay_alpha: shadow_alpha * self.progress(offset).clamp(0.0, 1.0),
        }
    }

    /// Dragged-panel offset for a drag that started at `start` and has
    /// moved `translation` points.
    ///
    /// Past the closed border the offset is hard-clamped. Past the open
    /// border it is rubber-banded when `rubber` is set, hard-clamped otherwise.
    pub fn drag_offset(&self, start: f64, translation: f64, rubber: bool) -> f64 {
        let factor = self.factor();
        let candidate = start + translation;
        let open = self.open_border();
        let closed = self.closed_border();

        let beyond_open = (candidate - open) * factor;
        if beyond_open > 0.0 {
            if rubber {
                return open + factor * rubber_band(beyond_open, self.menu_width);
            }
            return open;
        }
        if (candidate - closed) * factor < 0.0 {
            return closed;
        }
        candidate
    }

    /// How far the dragged panel at `offset` has travelled from closed
    /// (0.0) towards open (1.0), relative to the menu width.
    pub fn progress(&self, offset: f64) -> f64 {
        if self.menu_width <= 0.0 {
            return 0.0;
        }
        (offset - self.closed_border()) * self.factor() / self.menu_width
    }

    /// Dragged-panel offset within a frame set.
    pub fn dragged_offset(&self, frames: &PanelFrames) -> f64 {
        match self.position {
            MenuPosition::Above => frames.menu.x,
            MenuPosition::Under | MenuPosition::SideBySide => frames.content.x,
        }
    }
}
