//! Task dispatch: the seam between event handlers and the background queue.
//!
//! `send_message` and `write_reply` are fire-and-forget enqueues; only
//! `post_message` is awaited, because the thread handler inspects its
//! result before deciding whether to write a reply.

use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::context::{CommentNotificationContext, ThreadNotificationContext};
use crate::core::config::AppConfig;
use crate::core::models::Reply;
use crate::course::CourseKey;
use crate::errors::NotifyError;

/// Names of the queued jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobName {
    SendMessage,
    WriteReply,
}

/// The wire shape written to the queue: job name, correlation id for
/// tracing the task across processes, and the job's payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEnvelope {
    pub job: JobName,
    pub correlation_id: String,
    pub payload: serde_json::Value,
}

impl JobEnvelope {
    pub fn new(job: JobName, payload: serde_json::Value) -> Self {
        Self {
            job,
            correlation_id: Uuid::new_v4().to_string(),
            payload,
        }
    }
}

/// Result of the awaited post-notification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessageResult {
    pub status: u16,
    pub content: Option<String>,
}

#[async_trait]
pub trait TaskDispatcher: Send + Sync {
    /// Enqueue an email notification job. Fire-and-forget: returns as soon
    /// as the job is accepted by the queue.
    async fn send_message(
        &self,
        context: CommentNotificationContext,
    ) -> Result<(), NotifyError>;

    /// Post a thread notification and return the notifier's result.
    async fn post_message(
        &self,
        context: ThreadNotificationContext,
    ) -> Result<PostMessageResult, NotifyError>;

    /// Enqueue a job writing a reply into a thread. Fire-and-forget.
    async fn write_reply(
        &self,
        reply: Reply,
        course_key: CourseKey,
        thread_id: String,
    ) -> Result<(), NotifyError>;
}

/// Production dispatcher: SQS for queued jobs, HTTP for the awaited post.
pub struct SqsDispatcher {
    config: AppConfig,
    http: reqwest::Client,
}

impl SqsDispatcher {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    async fn enqueue(&self, envelope: &JobEnvelope) -> Result<(), NotifyError> {
        let shared_config = aws_config::from_env().load().await;
        let client = SqsClient::new(&shared_config);
        let message_body = serde_json::to_string(envelope)
            .map_err(|e| NotifyError::ApiError(format!("Failed to serialize job: {e}")))?;

        client
            .send_message()
            .queue_url(&self.config.notification_queue_url)
            .message_body(message_body)
            .send()
            .await
            .map_err(|e| NotifyError::AwsError(format!("Failed to send job to SQS: {e}")))?;

        info!(
            "Enqueued {:?} job (corr_id={})",
            envelope.job, envelope.correlation_id
        );
        Ok(())
    }
}

#[async_trait]
impl TaskDispatcher for SqsDispatcher {
    async fn send_message(
        &self,
        context: CommentNotificationContext,
    ) -> Result<(), NotifyError> {
        let envelope = JobEnvelope::new(JobName::SendMessage, serde_json::to_value(&context)?);
        self.enqueue(&envelope).await
    }

    async fn post_message(
        &self,
        context: ThreadNotificationContext,
    ) -> Result<PostMessageResult, NotifyError> {
        let resp = self
            .http
            .post(&self.config.forum_notifier_url)
            .json(&context)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        let content = if body.is_empty() { None } else { Some(body) };
        Ok(PostMessageResult { status, content })
    }

    async fn write_reply(
        &self,
        reply: Reply,
        course_key: CourseKey,
        thread_id: String,
    ) -> Result<(), NotifyError> {
        let payload = json!({
            "reply": reply,
            "course_key": course_key.to_string(),
            "thread_id": thread_id,
        });
        let envelope = JobEnvelope::new(JobName::WriteReply, payload);
        self.enqueue(&envelope).await
    }
}
