//! Core types and constructors for SideMenuController.

use serde::Serialize;
use sidemenu_common::events::LifecycleEvent;
use sidemenu_common::types::{ContentId, LayoutDirection, Rect};
use sidemenu_config::{MenuDirection, SideMenuConfig};
use tokio::sync::broadcast;
use tracing::warn;

use crate::cache::ContentCache;
use crate::delegate::SideMenuDelegate;
use crate::geometry::{PanelFrames, PanelGeometry};
use crate::host::{PanelHost, StatusBar, TransitionId};

/// Invoked when an open/close finishes. The flag is `false` when the
/// transition was cut short by a newer one.
pub type VisibilityCompletion = Box<dyn FnOnce(bool)>;
/// Invoked when a content swap finishes.
pub type ContentCompletion = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy)]
pub(super) struct DragState {
    pub(super) start_x: f64,
    pub(super) was_open: bool,
    /// Set by the first update that actually moves the panel.
    pub(super) moved: bool,
}

pub(super) struct MenuTransition {
    pub(super) id: TransitionId,
    pub(super) visible: bool,
    pub(super) animated: bool,
    pub(super) notify: bool,
    pub(super) change_status_bar: bool,
    pub(super) completion: Option<VisibilityCompletion>,
}

pub(super) struct ContentTransition {
    pub(super) id: TransitionId,
    pub(super) from: ContentId,
    pub(super) to: ContentId,
    pub(super) completion: Option<ContentCompletion>,
}

/// Snapshot of the panel visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelState {
    pub is_open: bool,
    pub adjusted_direction: MenuDirection,
    pub menu_offset_x: f64,
    pub content_offset_x: f64,
    pub is_dragging: bool,
    pub drag_start_offset_x: Option<f64>,
}

/// Container hosting a menu panel and a content panel.
///
/// Owns the visibility state machine, the drag state and the content
/// cache. Rendering and animation are delegated to a [`PanelHost`];
/// animated transitions are reported back through
/// [`SideMenuController::complete_transition`].
pub struct SideMenuController {
    pub(super) config: SideMenuConfig,
    pub(super) host: Box<dyn PanelHost>,
    pub(super) status_bar: Box<dyn StatusBar>,
    pub(super) delegate: SideMenuDelegate,
    pub(super) cache: ContentCache,
    pub(super) menu: Option<ContentId>,
    pub(super) content: Option<ContentId>,
    pub(super) loaded: bool,
    pub(super) layout_direction: LayoutDirection,
    /// Direction after applying the language direction.
    pub(super) adjusted_direction: MenuDirection,
    /// Container bounds in local coordinates.
    pub(super) container: Rect,
    /// Last frames handed to the host.
    pub(super) frames: PanelFrames,
    pub(super) overlay_visible: bool,
    pub(super) placeholder_visible: bool,
    pub(super) is_open: bool,
    pub(super) drag: Option<DragState>,
    pub(super) menu_transition: Option<MenuTransition>,
    pub(super) content_transition: Option<ContentTransition>,
    pub(super) next_transition: u64,
    pub(super) lifecycle: Option<broadcast::Receiver<LifecycleEvent>>,
}

impl SideMenuController {
    /// Create a controller with no panels. Both must be set before `load`.
    ///
    /// An out-of-range config is accepted with a warning; the menu width
    /// and animation durations are clamped where they are used.
    pub fn new(
        config: SideMenuConfig,
        host: Box<dyn PanelHost>,
        status_bar: Box<dyn StatusBar>,
    ) -> Self {
        if let Err(e) = sidemenu_config::validation::validate(&config) {
            warn!("side menu config out of range, clamping: {e}");
        }
        let adjusted_direction = config.direction;
        Self {
            config,
            host,
            status_bar,
            delegate: SideMenuDelegate::default(),
            cache: ContentCache::new(),
            menu: None,
            content: None,
            loaded: false,
            layout_direction: LayoutDirection::default(),
            adjusted_direction,
            container: Rect::default(),
            frames: PanelFrames {
                menu: Rect::default(),
                content: Rect::default(),
                overlay_alpha: 0.0,
            },
            overlay_visible: false,
            placeholder_visible: false,
            is_open: false,
            drag: None,
            menu_transition: None,
            content_transition: None,
            next_transition: 1,
            lifecycle: None,
        }
    }

    /// Create a controller with both panels already assigned.
    pub fn with_panels(
        config: SideMenuConfig,
        host: Box<dyn PanelHost>,
        status_bar: Box<dyn StatusBar>,
        menu: ContentId,
        content: ContentId,
    ) -> Self {
        let mut controller = Self::new(config, host, status_bar);
        controller.menu = Some(menu);
        controller.content = Some(content);
        controller
    }

    pub fn set_delegate(&mut self, delegate: SideMenuDelegate) {
        self.delegate = delegate;
    }

    // -- Accessors --

    pub fn config(&self) -> &SideMenuConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn adjusted_direction(&self) -> MenuDirection {
        self.adjusted_direction
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    pub fn menu(&self) -> Option<ContentId> {
        self.menu
    }

    pub fn content(&self) -> Option<ContentId> {
        self.content
    }

    pub fn frames(&self) -> PanelFrames {
        self.frames
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Whether an animated open/close or content swap is still running.
    pub fn has_pending_transition(&self) -> bool {
        self.menu_transition.is_some() || self.content_transition.is_some()
    }

    pub fn state(&self) -> PanelState {
        PanelState {
            is_open: self.is_open,
            adjusted_direction: self.adjusted_direction,
            menu_offset_x: self.frames.menu.x,
            content_offset_x: self.frames.content.x,
            is_dragging: self.drag.is_some(),
            drag_start_offset_x: self.drag.map(|d| d.start_x),
        }
    }

    // -- Internal helpers --

    pub(super) fn geometry(&self) -> PanelGeometry {
        PanelGeometry::new(
            self.config.position,
            self.adjusted_direction,
            self.config.clamped_menu_width(),
            self.container,
        )
    }

    /// Overlay alpha for a fully open menu.
    pub(super) fn shadow_alpha(&self) -> f64 {
        if self.config.animation.shadow_enabled {
            self.config.animation.shadow_alpha
        } else {
            0.0
        }
    }

    pub(super) fn allocate_transition(&mut self) -> TransitionId {
        let id = TransitionId(self.next_transition);
        self.next_transition += 1;
        id
    }

    pub(super) fn apply_frames(&mut self, frames: PanelFrames) {
        self.frames = frames;
        self.host.set_frames(frames);
    }

    pub(super) fn show_overlay(&mut self, visible: bool) {
        if self.overlay_visible != visible {
            self.overlay_visible = visible;
            self.host.set_overlay_visible(visible);
        }
    }
}
