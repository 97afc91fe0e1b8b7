use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub notification_queue_url: String,
    pub forum_notifier_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            notification_queue_url: env::var("NOTIFICATION_QUEUE_URL")
                .map_err(|e| format!("NOTIFICATION_QUEUE_URL: {}", e))?,
            forum_notifier_url: env::var("FORUM_NOTIFIER_URL")
                .map_err(|e| format!("FORUM_NOTIFIER_URL: {}", e))?,
        })
    }
}
