use serde::Serialize;

use super::{
    build::BuildInfo,
    status::{BuildStatus, StatusColor},
};

const BRANCH_FIELD_TITLE: &str = "Branch";
const COMMIT_FIELD_TITLE: &str = "Commit";
const BUILD_TIME_FIELD_TITLE: &str = "Time";
const TRIGGERED_BY_FIELD_TITLE: &str = "Triggered By";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// The Slack attachment for one build result. Serializes directly into the
/// wire shape expected by both delivery paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildMessage {
    pub title: String,
    pub title_link: String,
    pub color: StatusColor,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MessageField>,
}

pub fn build_message(build: &BuildInfo, status: BuildStatus) -> BuildMessage {
    BuildMessage {
        title: format!("{}: {}", status.text(), build.job_name),
        title_link: build.build_url.clone(),
        color: status.color(),
        fields: specified_fields(build),
    }
}

/// Optional fields in fixed order. A field is included only when its value is
/// non-empty after trimming; the stored value stays untrimmed.
fn specified_fields(build: &BuildInfo) -> Vec<MessageField> {
    let mut fields = Vec::new();
    append_field(&mut fields, BRANCH_FIELD_TITLE, &build.branch_name);
    append_field(&mut fields, COMMIT_FIELD_TITLE, &build.git_commit);
    append_field(&mut fields, BUILD_TIME_FIELD_TITLE, &build.build_time);
    append_field(&mut fields, TRIGGERED_BY_FIELD_TITLE, &build.triggered_by);
    fields
}

fn append_field(fields: &mut Vec<MessageField>, title: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    fields.push(MessageField {
        title: title.to_string(),
        value: value.to_string(),
        short: true,
    });
}
