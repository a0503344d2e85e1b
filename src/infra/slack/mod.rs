mod api;
mod models;
mod recording;

pub use api::SlackApiClient;
pub use recording::{RecordingSlackClient, SentMessage, CHANNEL_SEND_FAILURE, WEBHOOK_SEND_FAILURE};
