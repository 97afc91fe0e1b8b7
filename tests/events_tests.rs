use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use forum_notify::core::models::{ThreadRecord, UserRecord};
use forum_notify::errors::NotifyError;
use forum_notify::events::{DiscussionEvent, EventBus, EventKind, EventSubscriber};

struct NamedSubscriber {
    name: &'static str,
    calls: Arc<Mutex<Vec<&'static str>>>,
    fail: bool,
}

#[async_trait]
impl EventSubscriber for NamedSubscriber {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn on_event(&self, _event: &DiscussionEvent) -> Result<(), NotifyError> {
        self.calls.lock().unwrap().push(self.name);
        if self.fail {
            return Err(NotifyError::ApiError("boom".to_string()));
        }
        Ok(())
    }
}

fn thread_created() -> DiscussionEvent {
    DiscussionEvent::ThreadCreated {
        user: UserRecord {
            id: "17".to_string(),
            username: "thread_author".to_string(),
        },
        thread: ThreadRecord {
            id: "5a1b2c".to_string(),
            title: "Week 1 question".to_string(),
            body: "How do I submit?".to_string(),
            author_username: "thread_author".to_string(),
            author_id: "17".to_string(),
            created_at: "2026-08-01T09:30:00Z".to_string(),
            commentable_id: "week-1".to_string(),
            thread_type: "discussion".to_string(),
            course_id: "course-v1:Microsoft+Dat206+May30_2".to_string(),
        },
    }
}

#[test]
fn test_event_kind_matches_variant() {
    assert_eq!(thread_created().kind(), EventKind::ThreadCreated);
}

#[tokio::test]
async fn test_subscribers_run_in_registration_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    for name in ["first", "second", "third"] {
        bus.register(
            EventKind::ThreadCreated,
            Arc::new(NamedSubscriber {
                name,
                calls: calls.clone(),
                fail: false,
            }),
        );
    }

    bus.publish(&thread_created()).await;

    assert_eq!(*calls.lock().unwrap(), vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_failing_subscriber_does_not_stop_later_ones() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.register(
        EventKind::ThreadCreated,
        Arc::new(NamedSubscriber {
            name: "failing",
            calls: calls.clone(),
            fail: true,
        }),
    );
    bus.register(
        EventKind::ThreadCreated,
        Arc::new(NamedSubscriber {
            name: "surviving",
            calls: calls.clone(),
            fail: false,
        }),
    );

    bus.publish(&thread_created()).await;

    assert_eq!(*calls.lock().unwrap(), vec!["failing", "surviving"]);
}

#[tokio::test]
async fn test_publish_with_no_subscribers_is_a_no_op() {
    let bus = EventBus::new();
    bus.publish(&thread_created()).await;
}

#[tokio::test]
async fn test_subscribers_only_see_their_kind() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.register(
        EventKind::CommentCreated,
        Arc::new(NamedSubscriber {
            name: "comment_only",
            calls: calls.clone(),
            fail: false,
        }),
    );

    bus.publish(&thread_created()).await;

    assert!(calls.lock().unwrap().is_empty());
}
