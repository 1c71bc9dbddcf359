//! Default cross-fade content transition.

use std::time::Duration;

use super::{PanelHost, TransitionAnimator, TransitionContext, TransitionProgress};

/// Fades the new content in over the old one.
#[derive(Debug, Clone, Copy)]
pub struct FadeAnimator {
    pub duration: Duration,
}

impl Default for FadeAnimator {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(400),
        }
    }
}

impl TransitionAnimator for FadeAnimator {
    fn animate_transition(
        &mut self,
        context: &TransitionContext,
        host: &mut dyn PanelHost,
    ) -> TransitionProgress {
        if !context.animated {
            return TransitionProgress::Finished;
        }
        host.fade_content(context.id, context.from, context.to, self.duration);
        TransitionProgress::Pending
    }
}
