//! The SideMenuController drives panel visibility, dragging and content swaps.

mod content;
mod drag;
mod lifecycle;
mod status_bar;
mod types;
mod visibility;

pub use types::*;
