use ci_slack_notify::app::notify_once::{notify_once, NotifyOutcome};
use ci_slack_notify::domain::build::BuildInfo;
use ci_slack_notify::domain::decision::PICK_DELIVERY_MODE_ERROR;
use ci_slack_notify::infra::slack::{
    RecordingSlackClient, SentMessage, CHANNEL_SEND_FAILURE, WEBHOOK_SEND_FAILURE,
};

fn webhook_build() -> BuildInfo {
    BuildInfo {
        job_name: "nightly".to_string(),
        build_url: "https://ci.example.com/job/nightly/42".to_string(),
        build_status: "SUCCESS".to_string(),
        hook_url: "https://hooks.slack.com/services/T/B/X".to_string(),
        ..BuildInfo::default()
    }
}

fn channel_build() -> BuildInfo {
    BuildInfo {
        hook_url: String::new(),
        oauth_token: "xoxb-token".to_string(),
        dest_channel_id: "C8675309".to_string(),
        ..webhook_build()
    }
}

#[tokio::test]
async fn webhook_build_dispatches_via_webhook() {
    let slack = RecordingSlackClient::new();

    let outcome = notify_once(&webhook_build(), &slack)
        .await
        .expect("notify should succeed");

    assert_eq!(
        outcome,
        NotifyOutcome::Sent {
            job_name: "nightly".to_string()
        }
    );
    assert_eq!(
        outcome.describe(),
        "Message successfully sent to channel for nightly"
    );

    let sent = slack.sent();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        SentMessage::Webhook { hook_url, message } => {
            assert_eq!(hook_url, "https://hooks.slack.com/services/T/B/X");
            assert_eq!(message.title, "Success: nightly");
        }
        other => panic!("expected webhook dispatch, got {other:?}"),
    }
}

#[tokio::test]
async fn channel_credentials_win_over_webhook() {
    let slack = RecordingSlackClient::new();
    let build = BuildInfo {
        hook_url: "https://hooks.slack.com/services/T/B/X".to_string(),
        ..channel_build()
    };

    notify_once(&build, &slack)
        .await
        .expect("notify should succeed");

    let sent = slack.sent();
    assert_eq!(sent.len(), 1);
    assert!(
        matches!(&sent[0], SentMessage::Channel { channel_id, .. } if channel_id == "C8675309")
    );
}

#[tokio::test]
async fn skipped_success_never_touches_the_transport() {
    let slack = RecordingSlackClient::with_failures(true, true);
    let build = BuildInfo {
        skip_if_success: true,
        ..webhook_build()
    };

    let outcome = notify_once(&build, &slack)
        .await
        .expect("skip should not error");

    assert_eq!(outcome, NotifyOutcome::Skipped);
    assert_eq!(outcome.describe(), "Skipped posting to Slack");
    assert!(slack.sent().is_empty());
}

#[tokio::test]
async fn fixed_build_posts_even_with_skip_flag() {
    let slack = RecordingSlackClient::new();
    let build = BuildInfo {
        skip_if_success: true,
        last_build_status: "FAILURE".to_string(),
        ..webhook_build()
    };

    let outcome = notify_once(&build, &slack)
        .await
        .expect("notify should succeed");

    assert!(matches!(outcome, NotifyOutcome::Sent { .. }));
    let sent = slack.sent();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        SentMessage::Webhook { message, .. } => {
            assert_eq!(message.title, "Fixed: nightly");
            assert_eq!(message.color.as_str(), "good");
        }
        other => panic!("expected webhook dispatch, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_credentials_fail_with_fixed_message() {
    let slack = RecordingSlackClient::new();
    let build = BuildInfo {
        hook_url: String::new(),
        ..webhook_build()
    };

    let err = notify_once(&build, &slack)
        .await
        .expect_err("notify should fail");
    assert_eq!(err.to_string(), PICK_DELIVERY_MODE_ERROR);
    assert!(slack.sent().is_empty());
}

#[tokio::test]
async fn webhook_transport_error_propagates_unmodified() {
    let slack = RecordingSlackClient::with_failures(false, true);

    let err = notify_once(&webhook_build(), &slack)
        .await
        .expect_err("notify should fail");
    assert_eq!(err.to_string(), WEBHOOK_SEND_FAILURE);
}

#[tokio::test]
async fn channel_transport_error_propagates_unmodified() {
    let slack = RecordingSlackClient::with_failures(true, false);

    let err = notify_once(&channel_build(), &slack)
        .await
        .expect_err("notify should fail");
    assert_eq!(err.to_string(), CHANNEL_SEND_FAILURE);
}
