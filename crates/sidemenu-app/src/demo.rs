//! Scripted session exercising gestures, commands and lifecycle events.

use sidemenu_common::events::{EventBus, LifecycleEvent};
use sidemenu_common::types::{ContentId, LayoutDirection, Rect, Vector};
use sidemenu_common::Result;
use sidemenu_config::SideMenuConfig;
use sidemenu_controller::{
    PanPhase, SideMenuCommand, SideMenuController, SideMenuDelegate, TouchTarget,
};
use tracing::{info, warn};

use crate::host::{LoggingHost, LoggingStatusBar, PendingTransitions};

const MENU: ContentId = ContentId(1);
const HOME: ContentId = ContentId(2);

pub struct Session {
    controller: SideMenuController,
    pending: PendingTransitions,
    bus: EventBus,
}

impl Session {
    pub fn new(config: SideMenuConfig, layout: LayoutDirection) -> Self {
        let pending = PendingTransitions::default();
        let host = LoggingHost {
            layout,
            pending: pending.clone(),
        };
        let mut controller = SideMenuController::with_panels(
            config,
            Box::new(host),
            Box::new(LoggingStatusBar::default()),
            MENU,
            HOME,
        );
        controller.set_delegate(
            SideMenuDelegate::new()
                .on_will_open_menu(|| info!("will open menu"))
                .on_did_open_menu(|| info!("did open menu"))
                .on_will_hide_menu(|| info!("will hide menu"))
                .on_did_hide_menu(|| info!("did hide menu"))
                .on_did_show(|content, animated| info!(%content, animated, "did show")),
        );
        controller.cache_factory("settings", || ContentId(3));
        controller.cache_content("profile", ContentId(4));

        let bus = EventBus::default();
        controller.subscribe_lifecycle(&bus);

        Self {
            controller,
            pending,
            bus,
        }
    }

    pub fn controller(&self) -> &SideMenuController {
        &self.controller
    }

    /// Report every scheduled transition as finished.
    fn settle(&mut self) {
        loop {
            let batch: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            if batch.is_empty() {
                return;
            }
            for id in batch {
                self.controller.complete_transition(id, true);
            }
        }
    }

    fn drag(&mut self, translations: &[f64]) {
        let velocity = Vector::new(600.0 * self.controller.adjusted_direction().factor(), 30.0);
        if !self.controller.should_receive_touch(&TouchTarget::plain())
            || !self.controller.should_begin_pan(velocity)
        {
            warn!("pan rejected");
            return;
        }
        self.controller.handle_pan(PanPhase::Began);
        for &translation_x in translations {
            self.controller.handle_pan(PanPhase::Changed { translation_x });
        }
        self.controller.handle_pan(PanPhase::Ended);
        self.settle();
    }

    pub fn run(&mut self, bounds: Rect) -> Result<()> {
        self.controller.try_load(bounds)?;

        let factor = self.controller.adjusted_direction().factor();
        info!("short drag, menu should stay closed");
        self.drag(&[20.0 * factor, 30.0 * factor]);

        info!("long drag, menu should open");
        self.drag(&[80.0 * factor, 200.0 * factor, 420.0 * factor]);
        info!(open = self.controller.is_open(), "after drag");

        for cmd in [
            SideMenuCommand::ShowContent("settings".into()),
            SideMenuCommand::Close,
            SideMenuCommand::Toggle,
            SideMenuCommand::ShowContent("missing".into()),
        ] {
            let changed = self.controller.execute(cmd.clone());
            info!(?cmd, changed, "command");
            self.settle();
        }
        info!(
            identifier = ?self.controller.current_cache_identifier(),
            "current content"
        );

        self.controller.tap_overlay();
        self.settle();

        self.controller.open(false, None);
        self.bus.publish(LifecycleEvent::EnteredBackground);
        let handled = self.controller.pump_lifecycle_events();
        info!(handled, open = self.controller.is_open(), "lifecycle events");

        self.controller
            .transition_to_size(Rect::new(0.0, 0.0, bounds.height, bounds.width));
        self.settle();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ends_closed_on_settings() {
        let config = SideMenuConfig {
            hide_menu_on_background: true,
            ..SideMenuConfig::default()
        };
        let mut session = Session::new(config, LayoutDirection::LeftToRight);
        session.run(Rect::new(0.0, 0.0, 375.0, 812.0)).unwrap();

        let controller = session.controller();
        assert!(!controller.is_open());
        assert!(!controller.has_pending_transition());
        assert_eq!(controller.current_cache_identifier(), Some("settings"));
        assert_eq!(controller.container().width, 812.0);
    }

    #[test]
    fn session_runs_right_to_left() {
        let mut session = Session::new(SideMenuConfig::default(), LayoutDirection::RightToLeft);
        session.run(Rect::new(0.0, 0.0, 375.0, 812.0)).unwrap();
        assert!(!session.controller().has_pending_transition());
    }
}
