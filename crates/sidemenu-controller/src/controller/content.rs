//! Content swapping, menu replacement and the content cache.

use sidemenu_common::types::{ContentId, Region};
use sidemenu_common::CacheError;
use tracing::debug;

use crate::host::{FadeAnimator, TransitionAnimator, TransitionContext, TransitionProgress};

use super::{ContentCompletion, ContentTransition, SideMenuController};

impl SideMenuController {
    /// Make `content` the active content.
    ///
    /// Setting the already active content only runs `on_complete`.
    pub fn set_content(
        &mut self,
        content: ContentId,
        animated: bool,
        on_complete: Option<ContentCompletion>,
    ) {
        self.supersede_content_transition();

        let Some(previous) = self.content.filter(|_| self.loaded) else {
            self.content = Some(content);
            if let Some(done) = on_complete {
                done();
            }
            return;
        };
        if previous == content {
            if let Some(done) = on_complete {
                done();
            }
            return;
        }

        self.delegate.will_show(content, animated);
        self.host.attach(content, Region::Content);

        if !animated {
            self.host.detach(previous);
            self.content = Some(content);
            self.delegate.did_show(content, false);
            if let Some(done) = on_complete {
                done();
            }
            return;
        }

        let mut animator = self.delegate.animator(previous, content).unwrap_or_else(|| {
            debug!("no custom animator, falling back to fade");
            Box::new(FadeAnimator::default()) as Box<dyn TransitionAnimator>
        });
        let context = TransitionContext {
            id: self.allocate_transition(),
            from: previous,
            to: content,
            animated: true,
            interactive: false,
        };
        self.content_transition = Some(ContentTransition {
            id: context.id,
            from: previous,
            to: content,
            completion: on_complete,
        });
        if animator.animate_transition(&context, self.host.as_mut()) == TransitionProgress::Finished {
            self.complete_transition(context.id, true);
        }
    }

    /// Show the content cached under `identifier`.
    ///
    /// # Panics
    ///
    /// Panics if nothing is cached under `identifier`.
    pub fn set_content_with(
        &mut self,
        identifier: &str,
        animated: bool,
        on_complete: Option<ContentCompletion>,
    ) {
        if let Err(e) = self.try_set_content_with(identifier, animated, on_complete) {
            panic!("{e}");
        }
    }

    /// Fallible variant of [`set_content_with`](Self::set_content_with).
    pub fn try_set_content_with(
        &mut self,
        identifier: &str,
        animated: bool,
        on_complete: Option<ContentCompletion>,
    ) -> Result<(), CacheError> {
        let content = self.cache.resolve(identifier)?;
        self.set_content(content, animated, on_complete);
        Ok(())
    }

    /// Replace the menu panel.
    pub fn set_menu(&mut self, menu: ContentId) {
        if self.menu == Some(menu) {
            return;
        }
        if self.loaded {
            self.host.attach(menu, Region::Menu);
            if let Some(previous) = self.menu {
                self.host.detach(previous);
            }
        }
        self.menu = Some(menu);
    }

    pub fn cache_content(&mut self, identifier: impl Into<String>, content: ContentId) {
        self.cache.insert_handle(identifier, content);
    }

    /// Cache a factory that is only run the first time `identifier` is shown.
    pub fn cache_factory(
        &mut self,
        identifier: impl Into<String>,
        factory: impl FnOnce() -> ContentId + 'static,
    ) {
        self.cache.insert_factory(identifier, Box::new(factory));
    }

    /// Drop whatever is cached under `identifier`.
    pub fn clear_cache(&mut self, identifier: &str) -> bool {
        self.cache.remove(identifier)
    }

    /// Identifier the active content is cached under, if any.
    pub fn current_cache_identifier(&self) -> Option<&str> {
        self.content.and_then(|c| self.cache.identifier_of(c))
    }

    pub(super) fn supersede_content_transition(&mut self) {
        if let Some(transition) = self.content_transition.take() {
            debug!(id = transition.id.0, "superseding content transition");
            self.finish_content_transition(transition);
        }
    }

    pub(super) fn finish_content_transition(&mut self, transition: ContentTransition) {
        self.host.detach(transition.from);
        self.content = Some(transition.to);
        self.delegate.did_show(transition.to, true);
        if let Some(done) = transition.completion {
            done();
        }
    }
}
