/// Build metadata for a single CI invocation, populated once from the
/// environment. Optional fields use the empty string for "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub job_name: String,
    pub build_url: String,
    pub build_status: String,
    pub hook_url: String,
    pub dest_channel_id: String,
    pub oauth_token: String,
    pub last_build_status: String,
    pub branch_name: String,
    pub git_commit: String,
    pub build_time: String,
    pub triggered_by: String,
    pub skip_if_success: bool,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            job_name: String::new(),
            build_url: String::new(),
            build_status: String::new(),
            hook_url: String::new(),
            dest_channel_id: String::new(),
            oauth_token: String::new(),
            last_build_status: "UNKNOWN".to_string(),
            branch_name: String::new(),
            git_commit: String::new(),
            build_time: String::new(),
            triggered_by: String::new(),
            skip_if_success: false,
        }
    }
}
