use serde::{Deserialize, Serialize};

use crate::domain::message::BuildMessage;

#[derive(Debug, Serialize)]
pub(super) struct WebhookBody<'a> {
    pub(super) attachments: [&'a BuildMessage; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct ChannelMessageBody<'a> {
    pub(super) channel: &'a str,
    pub(super) attachments: [&'a BuildMessage; 1],
}

/// chat.postMessage replies 200 even on API failures; the body carries the
/// actual verdict.
#[derive(Debug, Deserialize)]
pub(super) struct ChatPostMessageResponse {
    pub(super) ok: bool,
    #[serde(default)]
    pub(super) error: Option<String>,
}
