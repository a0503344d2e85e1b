use anyhow::Result;

use crate::{
    domain::{
        build::BuildInfo,
        decision::{select_delivery_mode, should_skip_posting, DeliveryMode},
        message::build_message,
        status::resolve_contextual_status,
    },
    ports::SlackPort,
};

pub const SKIPPED_POSTING_MESSAGE: &str = "Skipped posting to Slack";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Skipped,
    Sent { job_name: String },
}

impl NotifyOutcome {
    pub fn describe(&self) -> String {
        match self {
            Self::Skipped => SKIPPED_POSTING_MESSAGE.to_string(),
            Self::Sent { job_name } => {
                format!("Message successfully sent to channel for {job_name}")
            }
        }
    }
}

/// Processes one build event end-to-end: resolve the contextual status,
/// honor the skip decision without touching the transport, otherwise build
/// the message and dispatch it over the selected delivery mode. Transport
/// errors propagate unmodified.
pub async fn notify_once<S>(build: &BuildInfo, slack: &S) -> Result<NotifyOutcome>
where
    S: SlackPort,
{
    let status = resolve_contextual_status(&build.build_status, &build.last_build_status);

    if should_skip_posting(build) {
        tracing::debug!(job = %build.job_name, "skipping successful build");
        return Ok(NotifyOutcome::Skipped);
    }

    let mode = select_delivery_mode(build)?;
    let message = build_message(build, status);

    match &mode {
        DeliveryMode::Channel { token, channel_id } => {
            tracing::debug!(job = %build.job_name, channel = %channel_id, "posting channel message");
            slack
                .post_channel_message(&message, token, channel_id)
                .await?;
        }
        DeliveryMode::Webhook { url } => {
            tracing::debug!(job = %build.job_name, "posting webhook message");
            slack.post_webhook_message(&message, url).await?;
        }
    }

    Ok(NotifyOutcome::Sent {
        job_name: build.job_name.clone(),
    })
}
