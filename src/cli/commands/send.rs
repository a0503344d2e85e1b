use anyhow::Result;

use crate::{
    app::notify_once::{notify_once, NotifyOutcome},
    config::load_build_info,
    infra::slack::{RecordingSlackClient, SentMessage, SlackApiClient},
};

pub(crate) async fn run(dry_run: bool) -> Result<()> {
    let build = load_build_info()?;

    if dry_run {
        let recorder = RecordingSlackClient::new();
        let outcome = notify_once(&build, &recorder).await?;
        for sent in recorder.sent() {
            let (destination, message) = match &sent {
                SentMessage::Channel {
                    channel_id,
                    message,
                } => (format!("channel {channel_id}"), message),
                SentMessage::Webhook { hook_url, message } => {
                    (format!("webhook {hook_url}"), message)
                }
            };
            println!("would send to {destination}:");
            println!("{}", serde_json::to_string_pretty(message)?);
        }
        if outcome == NotifyOutcome::Skipped {
            println!("{}", outcome.describe());
        }
        println!("mode: dry-run (nothing sent)");
        return Ok(());
    }

    let client = SlackApiClient::new();
    let outcome = notify_once(&build, &client).await?;
    println!("{}", outcome.describe());
    Ok(())
}
