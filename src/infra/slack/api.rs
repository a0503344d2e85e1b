use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::{domain::message::BuildMessage, ports::SlackPort};

use super::models::{ChannelMessageBody, ChatPostMessageResponse, WebhookBody};

const CHAT_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Production Slack transport. Proxy configuration (HTTP_PROXY/HTTPS_PROXY)
/// is picked up from the environment by reqwest.
#[derive(Debug, Clone)]
pub struct SlackApiClient {
    http: reqwest::Client,
    chat_post_message_url: String,
}

impl Default for SlackApiClient {
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_post_message_url: CHAT_POST_MESSAGE_URL.to_string(),
        }
    }
}

impl SlackApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points chat.postMessage at a different endpoint. Exists for tests
    /// against a local HTTP stub.
    pub fn new_with_api_url<S: Into<String>>(url: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_post_message_url: url.into(),
        }
    }
}

#[async_trait]
impl SlackPort for SlackApiClient {
    async fn post_channel_message(
        &self,
        message: &BuildMessage,
        token: &str,
        channel_id: &str,
    ) -> Result<()> {
        let body = ChannelMessageBody {
            channel: channel_id,
            attachments: [message],
        };
        let response = self
            .http
            .post(&self.chat_post_message_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .context("failed to reach the Slack API")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            bail!("Slack API request failed: {} - {}", status, text);
        }

        let reply: ChatPostMessageResponse = response
            .json()
            .await
            .context("invalid chat.postMessage response payload")?;
        if !reply.ok {
            bail!(
                "chat.postMessage rejected: {}",
                reply.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }

        Ok(())
    }

    async fn post_webhook_message(&self, message: &BuildMessage, hook_url: &str) -> Result<()> {
        let body = WebhookBody {
            attachments: [message],
        };
        let response = self
            .http
            .post(hook_url)
            .json(&body)
            .send()
            .await
            .context("failed to reach the Slack webhook")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            bail!("Slack webhook failed: {} - {}", status, text);
        }

        Ok(())
    }
}
