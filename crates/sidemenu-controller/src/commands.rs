//! Discrete commands for keybindings and menus.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideMenuCommand {
    Open,
    Close,
    Toggle,
    /// Show the content cached under this identifier.
    ShowContent(String),
}
