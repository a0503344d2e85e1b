use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::{domain::message::BuildMessage, ports::SlackPort};

pub const CHANNEL_SEND_FAILURE: &str = "channel message send failed";
pub const WEBHOOK_SEND_FAILURE: &str = "webhook message send failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Channel {
        channel_id: String,
        message: BuildMessage,
    },
    Webhook {
        hook_url: String,
        message: BuildMessage,
    },
}

/// In-memory Slack transport. Records every send; either operation can be
/// made to fail for error-path coverage. Also backs `send --dry-run`.
#[derive(Debug, Default)]
pub struct RecordingSlackClient {
    sent: Mutex<Vec<SentMessage>>,
    fail_channel: bool,
    fail_webhook: bool,
}

impl RecordingSlackClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failures(fail_channel: bool, fail_webhook: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_channel,
            fail_webhook,
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().expect("sent lock poisoned").clone()
    }
}

#[async_trait]
impl SlackPort for RecordingSlackClient {
    async fn post_channel_message(
        &self,
        message: &BuildMessage,
        _token: &str,
        channel_id: &str,
    ) -> Result<()> {
        if self.fail_channel {
            return Err(anyhow!(CHANNEL_SEND_FAILURE));
        }
        self.sent
            .lock()
            .expect("sent lock poisoned")
            .push(SentMessage::Channel {
                channel_id: channel_id.to_string(),
                message: message.clone(),
            });
        Ok(())
    }

    async fn post_webhook_message(&self, message: &BuildMessage, hook_url: &str) -> Result<()> {
        if self.fail_webhook {
            return Err(anyhow!(WEBHOOK_SEND_FAILURE));
        }
        self.sent
            .lock()
            .expect("sent lock poisoned")
            .push(SentMessage::Webhook {
                hook_url: hook_url.to_string(),
                message: message.clone(),
            });
        Ok(())
    }
}
