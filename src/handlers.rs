//! Event handlers for discussion notifications.
//!
//! Two subscribers are registered at startup: comment-created events are
//! gated on the per-site `enable_forum_notifications` flag and enqueue an
//! email notification; thread-created events post a notification
//! unconditionally and, when the notifier answers with content, write a
//! reply back into the thread.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::context::{CommentNotificationContext, ThreadNotificationContext};
use crate::core::models::{Reply, Site};
use crate::course::{CourseKey, get_course_urls};
use crate::dispatch::TaskDispatcher;
use crate::errors::NotifyError;
use crate::events::{DiscussionEvent, EventBus, EventKind, EventSubscriber};

pub const ENABLE_FORUM_NOTIFICATIONS_FOR_SITE_KEY: &str = "enable_forum_notifications";

/// Resolves the site the current event is happening on, if any.
#[async_trait]
pub trait SiteResolver: Send + Sync {
    async fn current_site(&self) -> Option<Site>;
}

/// A resolver that always answers with the same site. Useful for
/// single-site deployments and tests.
pub struct StaticSiteResolver {
    site: Option<Site>,
}

impl StaticSiteResolver {
    pub fn new(site: Option<Site>) -> Self {
        Self { site }
    }
}

#[async_trait]
impl SiteResolver for StaticSiteResolver {
    async fn current_site(&self) -> Option<Site> {
        self.site.clone()
    }
}

/// Whether forum notifications are enabled for `site`.
///
/// A missing configuration record and an unset flag both mean "disabled";
/// neither is an error.
pub fn forum_notifications_enabled(site: &Site, post_id: &str) -> bool {
    let Some(configuration) = site.configuration.as_ref() else {
        info!(
            "Discussion: No configuration for site {}. Not sending message about post: {}.",
            site.id, post_id
        );
        return false;
    };

    if !configuration.get_bool(ENABLE_FORUM_NOTIFICATIONS_FOR_SITE_KEY, false) {
        info!(
            "Discussion: notifications not enabled for site: {}. Not sending message about post: {}.",
            site.id, post_id
        );
        return false;
    }

    true
}

/// Sends an email notification job for each created comment, gated on the
/// per-site flag.
pub struct EmailNotificationHandler {
    sites: Arc<dyn SiteResolver>,
    dispatcher: Arc<dyn TaskDispatcher>,
}

impl EmailNotificationHandler {
    pub fn new(sites: Arc<dyn SiteResolver>, dispatcher: Arc<dyn TaskDispatcher>) -> Self {
        Self { sites, dispatcher }
    }
}

#[async_trait]
impl EventSubscriber for EmailNotificationHandler {
    fn name(&self) -> &'static str {
        "send_discussion_email_notification"
    }

    async fn on_event(&self, event: &DiscussionEvent) -> Result<(), NotifyError> {
        let DiscussionEvent::CommentCreated { comment, .. } = event else {
            return Ok(());
        };

        let Some(site) = self.sites.current_site().await else {
            info!(
                "Discussion: No current site, not sending notification about post: {}.",
                comment.id
            );
            return Ok(());
        };

        if !forum_notifications_enabled(&site, &comment.id) {
            return Ok(());
        }

        let context = CommentNotificationContext::build(comment, &site);
        // Failures on this path are absorbed; the event must not fail
        // because the queue was unavailable.
        if let Err(e) = self.dispatcher.send_message(context).await {
            error!(
                "Failed to enqueue notification for comment {}: {}",
                comment.id, e
            );
        }

        Ok(())
    }
}

/// Posts a notification for each created thread and conditionally writes a
/// reply carrying the notifier's content back into the thread.
pub struct ThreadNotificationHandler {
    dispatcher: Arc<dyn TaskDispatcher>,
}

impl ThreadNotificationHandler {
    pub fn new(dispatcher: Arc<dyn TaskDispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventSubscriber for ThreadNotificationHandler {
    fn name(&self) -> &'static str {
        "send_discussion_notification"
    }

    async fn on_event(&self, event: &DiscussionEvent) -> Result<(), NotifyError> {
        let DiscussionEvent::ThreadCreated { thread, .. } = event else {
            return Ok(());
        };

        let urls = get_course_urls(&thread.course_id);
        let context = ThreadNotificationContext::build(thread, urls);
        let result = self.dispatcher.post_message(context).await?;

        let content = match (result.status, result.content) {
            (200, Some(content)) if !content.is_empty() => content,
            (status, content) => {
                return Err(NotifyError::UnexpectedPostResult(format!(
                    "status {status}, content present: {} for thread {}",
                    content.is_some_and(|c| !c.is_empty()),
                    thread.id
                )));
            }
        };

        let course_key = CourseKey::from_string(&thread.course_id)?;
        let reply = Reply { body: content };
        self.dispatcher
            .write_reply(reply, course_key, thread.id.clone())
            .await?;

        Ok(())
    }
}

/// Registers both handlers on the bus. Called once at process startup.
pub fn register_handlers(
    bus: &mut EventBus,
    sites: Arc<dyn SiteResolver>,
    dispatcher: Arc<dyn TaskDispatcher>,
) {
    bus.register(
        EventKind::CommentCreated,
        Arc::new(EmailNotificationHandler::new(sites, dispatcher.clone())),
    );
    bus.register(
        EventKind::ThreadCreated,
        Arc::new(ThreadNotificationHandler::new(dispatcher)),
    );
}
