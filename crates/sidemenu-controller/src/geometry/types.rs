//! Geometry types: the panel geometry descriptor, borders and frame sets.

use serde::{Deserialize, Serialize};
use sidemenu_common::types::{Rect, Region};
use sidemenu_config::{MenuDirection, MenuPosition};

/// Resistance multiplier applied to drag distance past the open border.
pub const RUBBER_BAND_FACTOR: f64 = 0.5;

/// Horizontal offsets between which the dragged panel may travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borders {
    pub left: f64,
    pub right: f64,
}

/// Frames for both panels plus the shadow overlay alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelFrames {
    pub menu: Rect,
    pub content: Rect,
    pub overlay_alpha: f64,
}

/// Everything needed to place the two panels inside the container.
///
/// Frames are expressed in the container's own coordinate space: the
/// container's origin is always `(0, 0)` and only its size is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub position: MenuPosition,
    /// Direction after language-direction resolution.
    pub direction: MenuDirection,
    pub menu_width: f64,
    pub container_width: f64,
    pub container_height: f64,
}

impl PanelGeometry {
    pub fn new(
        position: MenuPosition,
        direction: MenuDirection,
        menu_width: f64,
        container: Rect,
    ) -> Self {
        Self {
            position,
            direction,
            menu_width,
            container_width: container.width,
            container_height: container.height,
        }
    }

    /// The panel that moves while dragging.
    pub fn dragged_region(&self) -> Region {
        match self.position {
            MenuPosition::Above => Region::Menu,
            MenuPosition::Under | MenuPosition::SideBySide => Region::Content,
        }
    }

    pub(super) fn full_frame(&self, x: f64) -> Rect {
        Rect::new(x, 0.0, self.container_width, self.container_height)
    }
}
