use anyhow::Result;
use async_trait::async_trait;

use crate::domain::message::BuildMessage;

/// Messaging transport seam. One production implementation talks to Slack
/// over HTTP; the in-memory implementation backs tests and dry runs.
#[async_trait]
pub trait SlackPort: Send + Sync {
    async fn post_channel_message(
        &self,
        message: &BuildMessage,
        token: &str,
        channel_id: &str,
    ) -> Result<()>;

    async fn post_webhook_message(&self, message: &BuildMessage, hook_url: &str) -> Result<()>;
}
