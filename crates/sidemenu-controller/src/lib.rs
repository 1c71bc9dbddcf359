//! Side menu controller: a container with a menu panel and a content panel.
//!
//! Interactive pan gestures, animated open/close, rubber banding at the
//! open border, a content cache with lazy factories and pluggable content
//! transitions. All rendering goes through the [`host::PanelHost`] trait.

pub mod cache;
pub mod commands;
pub mod controller;
pub mod delegate;
pub mod geometry;
pub mod gesture;
pub mod host;

pub use cache::{CacheEntry, ContentCache, ContentFactory};
pub use commands::SideMenuCommand;
pub use controller::{ContentCompletion, PanelState, SideMenuController, VisibilityCompletion};
pub use delegate::SideMenuDelegate;
pub use geometry::{PanelFrames, PanelGeometry};
pub use gesture::{PanPhase, TouchTarget, TouchTargetKind};
pub use host::{
    FadeAnimator, PanelHost, SpringAnimation, StatusBar, TransitionAnimator, TransitionContext,
    TransitionId, TransitionProgress,
};
