//! Status bar updates driven by the menu state.

use sidemenu_config::StatusBarBehavior;
use tracing::trace;

use super::SideMenuController;

impl SideMenuController {
    /// Hide or show the status bar according to the configured behavior.
    ///
    /// `hide_on_menu` never animates and keeps a placeholder in place of
    /// the real bar while it is hidden.
    pub(super) fn set_status_bar_hidden(&mut self, hidden: bool, animated: bool) {
        let behavior = self.config.status_bar_behavior;
        if behavior == StatusBarBehavior::None || self.status_bar.is_hidden() == hidden {
            return;
        }
        trace!(hidden, ?behavior, "updating status bar");
        let animated = animated && behavior != StatusBarBehavior::HideOnMenu;
        self.status_bar.set_hidden(hidden, behavior, animated);

        if behavior == StatusBarBehavior::HideOnMenu {
            if !hidden {
                if self.placeholder_visible {
                    self.status_bar.remove_placeholder();
                    self.placeholder_visible = false;
                }
            } else if !self.placeholder_visible {
                self.placeholder_visible = self.status_bar.show_placeholder();
            }
        }
    }
}
