use std::env;

use anyhow::{anyhow, Result};

use crate::domain::build::BuildInfo;

#[derive(Debug, Clone, Copy)]
pub struct EnvVarSpec {
    pub name: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

pub const ENV_VARS: &[EnvVarSpec] = &[
    EnvVarSpec {
        name: "JOB_NAME",
        required: true,
        default: None,
        description: "Name of the build's job",
    },
    EnvVarSpec {
        name: "BUILD_URL",
        required: true,
        default: None,
        description: "Direct URL to the build",
    },
    EnvVarSpec {
        name: "BUILD_STATUS",
        required: true,
        default: None,
        description: "Status of build (e.g. currentBuild.currentResult in Jenkins)",
    },
    EnvVarSpec {
        name: "HOOK_URL",
        required: false,
        default: None,
        description: "Slack Webhook URL set via Incoming Webhooks",
    },
    EnvVarSpec {
        name: "DEST_CHANNEL_ID",
        required: false,
        default: None,
        description: "Destination Channel ID (not the name of the channel)",
    },
    EnvVarSpec {
        name: "OAUTH_TOKEN",
        required: false,
        default: None,
        description: "OAuth token used to send the message via an app",
    },
    EnvVarSpec {
        name: "LAST_BUILD_STATUS",
        required: false,
        default: Some("UNKNOWN"),
        description: "Status of the last build, used to derive the contextual status",
    },
    EnvVarSpec {
        name: "BRANCH_NAME",
        required: false,
        default: None,
        description: "Name of git branch",
    },
    EnvVarSpec {
        name: "GIT_COMMIT",
        required: false,
        default: None,
        description: "Git commit hash",
    },
    EnvVarSpec {
        name: "BUILD_TIME",
        required: false,
        default: None,
        description: "Build duration (e.g. durationString in Jenkins)",
    },
    EnvVarSpec {
        name: "TRIGGERED_BY",
        required: false,
        default: None,
        description: "The action which triggered the build",
    },
    EnvVarSpec {
        name: "SKIP_IF_SUCCESS",
        required: false,
        default: Some("false"),
        description: "Skip posting if the contextual status is success",
    },
];

pub fn load_build_info() -> Result<BuildInfo> {
    build_info_from_lookup(|name| env::var(name).ok())
}

/// Core of the env loader, with the environment injected so tests never
/// mutate process state. An unset or empty required variable fails naming
/// that variable; the first missing one wins in table order.
pub fn build_info_from_lookup<F>(lookup: F) -> Result<BuildInfo>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &'static str| -> Result<String> {
        lookup(name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| anyhow!("environment variable error: required key {name} missing value"))
    };
    let optional = |name: &str| lookup(name).unwrap_or_default();

    let job_name = required("JOB_NAME")?;
    let build_url = required("BUILD_URL")?;
    let build_status = required("BUILD_STATUS")?;

    let last_build_status = lookup("LAST_BUILD_STATUS")
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "UNKNOWN".to_string());

    let skip_if_success = match lookup("SKIP_IF_SUCCESS").filter(|value| !value.is_empty()) {
        None => false,
        Some(raw) => parse_bool(&raw).ok_or_else(|| {
            anyhow!("environment variable error: invalid boolean for key SKIP_IF_SUCCESS: '{raw}'")
        })?,
    };

    Ok(BuildInfo {
        job_name,
        build_url,
        build_status,
        hook_url: optional("HOOK_URL"),
        dest_channel_id: optional("DEST_CHANNEL_ID"),
        oauth_token: optional("OAUTH_TOKEN"),
        last_build_status,
        branch_name: optional("BRANCH_NAME"),
        git_commit: optional("GIT_COMMIT"),
        build_time: optional("BUILD_TIME"),
        triggered_by: optional("TRIGGERED_BY"),
        skip_if_success,
    })
}

// Accepts the boolean spellings Jenkins pipelines commonly export.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
