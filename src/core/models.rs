use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The user that triggered an event. Carried in event payloads but not read
/// by the current handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
}

/// A comment (reply) as read from the forum service. Timestamps arrive
/// already serialized as strings and are passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub body: String,
    pub author_username: String,
    pub author_id: String,
    pub created_at: String,
    /// The thread this comment belongs to.
    pub thread: ThreadRecord,
}

/// A discussion thread as read from the forum service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_username: String,
    pub author_id: String,
    pub created_at: String,
    pub commentable_id: String,
    pub thread_type: String,
    pub course_id: String,
}

/// A deployment site. A site without a configuration record is a valid
/// state, not an error.
#[derive(Debug, Clone)]
pub struct Site {
    pub id: String,
    pub configuration: Option<SiteConfiguration>,
}

/// Per-site feature flags.
#[derive(Debug, Clone, Default)]
pub struct SiteConfiguration {
    pub values: HashMap<String, serde_json::Value>,
}

impl SiteConfiguration {
    /// Reads a boolean flag, falling back to `default` when the flag is
    /// unset or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(default)
    }
}

/// A reply to be written back into a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub body: String,
}
