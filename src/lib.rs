/// Forum-notify - event-driven notification glue for a discussion forum.
///
/// This crate reacts to discussion events (a comment was created, a thread
/// was created) and hands notification work off to an external task queue:
/// 1. Comment events are gated on a per-site feature flag, then enqueued as
///    fire-and-forget email notification jobs.
/// 2. Thread events are posted to the forum notifier unconditionally; when
///    the notifier answers with content, a reply is written back into the
///    thread through a second queued job.
///
/// # Architecture
///
/// The system uses:
/// - An in-process event bus invoking subscribers in registration order
/// - SQS for fire-and-forget job submission
/// - reqwest for the one awaited call to the forum notifier
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use forum_notify::core::config::AppConfig;
/// use forum_notify::core::models::{Site, ThreadRecord, UserRecord};
/// use forum_notify::dispatch::SqsDispatcher;
/// use forum_notify::events::{DiscussionEvent, EventBus};
/// use forum_notify::handlers::{self, StaticSiteResolver};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     forum_notify::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let dispatcher = Arc::new(SqsDispatcher::new(config));
///     let sites = Arc::new(StaticSiteResolver::new(Some(Site {
///         id: "site-1".to_string(),
///         configuration: None,
///     })));
///
///     // Register handlers once at startup
///     let mut bus = EventBus::new();
///     handlers::register_handlers(&mut bus, sites, dispatcher);
///
///     // Publish events as they occur in the host application
///     let thread = ThreadRecord {
///         id: "5a1b2c".to_string(),
///         title: "Week 1 question".to_string(),
///         body: "How do I submit?".to_string(),
///         author_username: "learner".to_string(),
///         author_id: "42".to_string(),
///         created_at: "2026-08-29T12:00:00Z".to_string(),
///         commentable_id: "week-1".to_string(),
///         thread_type: "discussion".to_string(),
///         course_id: "course-v1:edX+DemoX+Demo_Course".to_string(),
///     };
///     let user = UserRecord {
///         id: "42".to_string(),
///         username: "learner".to_string(),
///     };
///     bus.publish(&DiscussionEvent::ThreadCreated { user, thread }).await;
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod context;
pub mod core;
pub mod course;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod handlers;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable
/// for log aggregation. It should be called once at process startup, before
/// handlers are registered.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
