//! The in-process discussion event bus.
//!
//! Subscribers are registered once at process startup and invoked
//! sequentially in registration order when an event is published. A failing
//! subscriber is logged and does not stop later subscribers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::core::models::{CommentRecord, ThreadRecord, UserRecord};
use crate::errors::NotifyError;

/// A discussion event as fired by the host application.
#[derive(Debug, Clone)]
pub enum DiscussionEvent {
    CommentCreated {
        user: UserRecord,
        comment: CommentRecord,
    },
    ThreadCreated {
        user: UserRecord,
        thread: ThreadRecord,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CommentCreated,
    ThreadCreated,
}

impl DiscussionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DiscussionEvent::CommentCreated { .. } => EventKind::CommentCreated,
            DiscussionEvent::ThreadCreated { .. } => EventKind::ThreadCreated,
        }
    }
}

#[async_trait]
pub trait EventSubscriber: Send + Sync {
    /// Name used in logs when the subscriber fails.
    fn name(&self) -> &'static str;

    async fn on_event(&self, event: &DiscussionEvent) -> Result<(), NotifyError>;
}

/// Maps event kinds to ordered subscriber lists.
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<EventKind, Vec<Arc<dyn EventSubscriber>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EventKind, subscriber: Arc<dyn EventSubscriber>) {
        self.subscribers.entry(kind).or_default().push(subscriber);
    }

    /// Invokes every subscriber registered for the event's kind, in
    /// registration order. Subscriber errors are logged and absorbed.
    pub async fn publish(&self, event: &DiscussionEvent) {
        let Some(subscribers) = self.subscribers.get(&event.kind()) else {
            debug!("No subscribers for {:?} event", event.kind());
            return;
        };

        for subscriber in subscribers {
            if let Err(e) = subscriber.on_event(event).await {
                error!(
                    "Subscriber {} failed handling {:?} event: {}",
                    subscriber.name(),
                    event.kind(),
                    e
                );
            }
        }
    }
}
