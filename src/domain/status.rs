use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Contextual build status. Covers the raw CI vocabulary plus the two
/// derived values (`Fixed`, `StillFailing`) that only exist relative to the
/// previous build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    Fixed,
    Unstable,
    Unknown,
    Failure,
    StillFailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Good,
    Warning,
    Danger,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl BuildStatus {
    /// Looks up a raw status string from the CI vocabulary. Unrecognized
    /// input is `None`; callers decide the fallback.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "SUCCESS" => Some(Self::Success),
            "FIXED" => Some(Self::Fixed),
            "UNSTABLE" => Some(Self::Unstable),
            "UNKNOWN" => Some(Self::Unknown),
            "FAILURE" => Some(Self::Failure),
            "STILL FAILING" => Some(Self::StillFailing),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Fixed => "Fixed",
            Self::Unstable => "Unstable",
            Self::Unknown => "Unknown",
            Self::Failure => "Failed",
            Self::StillFailing => "Still Failing",
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            Self::Success | Self::Fixed => StatusColor::Good,
            Self::Unstable | Self::Unknown => StatusColor::Warning,
            Self::Failure | Self::StillFailing => StatusColor::Danger,
        }
    }
}

impl Display for BuildStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Resolves the status to report by comparing the current build against the
/// previous one. Only an exact `FAILURE` last status triggers the
/// fixed/still-failing overrides; everything else reports the current status
/// as looked up, degrading unrecognized input to `Unknown`.
pub fn resolve_contextual_status(current: &str, last: &str) -> BuildStatus {
    let current = BuildStatus::from_key(current).unwrap_or(BuildStatus::Unknown);
    let last = BuildStatus::from_key(last).unwrap_or(BuildStatus::Unknown);

    match (last, current) {
        (BuildStatus::Failure, BuildStatus::Success) => BuildStatus::Fixed,
        (BuildStatus::Failure, BuildStatus::Failure) => BuildStatus::StillFailing,
        _ => current,
    }
}
