use anyhow::{anyhow, Result};

use super::{
    build::BuildInfo,
    status::{resolve_contextual_status, BuildStatus},
};

pub const PICK_DELIVERY_MODE_ERROR: &str =
    "please specify either HOOK_URL or both OAUTH_TOKEN and DEST_CHANNEL_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    Channel { token: String, channel_id: String },
    Webhook { url: String },
}

/// True only for a plain `Success`. A success after a failure resolves to
/// `Fixed` and is always posted.
pub fn should_skip_posting(build: &BuildInfo) -> bool {
    build.skip_if_success
        && resolve_contextual_status(&build.build_status, &build.last_build_status)
            == BuildStatus::Success
}

/// Channel credentials win over a webhook URL when both are configured.
pub fn select_delivery_mode(build: &BuildInfo) -> Result<DeliveryMode> {
    if !build.oauth_token.is_empty() && !build.dest_channel_id.is_empty() {
        return Ok(DeliveryMode::Channel {
            token: build.oauth_token.clone(),
            channel_id: build.dest_channel_id.clone(),
        });
    }
    if !build.hook_url.is_empty() {
        return Ok(DeliveryMode::Webhook {
            url: build.hook_url.clone(),
        });
    }
    Err(anyhow!(PICK_DELIVERY_MODE_ERROR))
}
