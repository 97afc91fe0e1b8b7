//! Notification context builders.
//!
//! Contexts are the flat records handed to the task dispatcher. Every field
//! is mandatory, so a context is always fully formed before dispatch; values
//! are copied from the input records, never recomputed.

use serde::{Deserialize, Serialize};

use crate::core::models::{CommentRecord, Site, ThreadRecord};
use crate::course::CourseUrls;

/// Context for a comment-created email notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNotificationContext {
    pub course_id: String,
    pub comment_body: String,
    pub thread_id: String,
    pub thread_title: String,
    pub thread_author_name: String,
    pub thread_author_id: String,
    pub thread_created_at: String,
    pub thread_commentable_id: String,
    // values unique to comments (replies)
    pub comment_id: String,
    pub comment_author_name: String,
    pub comment_author_id: String,
    pub comment_created_at: String,
    pub site_id: String,
}

impl CommentNotificationContext {
    pub fn build(comment: &CommentRecord, site: &Site) -> Self {
        let thread = &comment.thread;
        Self {
            course_id: thread.course_id.clone(),
            comment_body: comment.body.clone(),
            thread_id: thread.id.clone(),
            thread_title: thread.title.clone(),
            thread_author_name: thread.author_username.clone(),
            thread_author_id: thread.author_id.clone(),
            thread_created_at: thread.created_at.clone(),
            thread_commentable_id: thread.commentable_id.clone(),
            comment_id: comment.id.clone(),
            comment_author_name: comment.author_username.clone(),
            comment_author_id: comment.author_id.clone(),
            comment_created_at: comment.created_at.clone(),
            site_id: site.id.clone(),
        }
    }
}

/// Context for a thread-created notification.
///
/// `comment_body` carries the thread body; the key name is shared with the
/// comment context so downstream templates can treat both uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadNotificationContext {
    pub course_id: String,
    pub comment_body: String,
    pub thread_id: String,
    pub thread_title: String,
    pub thread_author_name: String,
    pub thread_author_id: String,
    pub thread_created_at: String,
    pub thread_commentable_id: String,
    // values unique to threads (new posts)
    pub thread_type: String,
    pub course_home_url: String,
    pub course_search_url: String,
    pub forum_threads_url: String,
    pub syllabus_url: String,
    pub faq_url: String,
}

impl ThreadNotificationContext {
    pub fn build(thread: &ThreadRecord, urls: CourseUrls) -> Self {
        Self {
            course_id: thread.course_id.clone(),
            comment_body: thread.body.clone(),
            thread_id: thread.id.clone(),
            thread_title: thread.title.clone(),
            thread_author_name: thread.author_username.clone(),
            thread_author_id: thread.author_id.clone(),
            thread_created_at: thread.created_at.clone(),
            thread_commentable_id: thread.commentable_id.clone(),
            thread_type: thread.thread_type.clone(),
            course_home_url: urls.course_home_url.to_string(),
            course_search_url: urls.course_search_url.to_string(),
            forum_threads_url: urls.forum_threads_url.to_string(),
            syllabus_url: urls.syllabus_url.to_string(),
            faq_url: urls.faq_url.to_string(),
        }
    }
}
