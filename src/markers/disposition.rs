//! Version-gated test dispositions
//!
//! A `Markers` value is built once per session from the suite version
//! and the SDK version, then consulted per test. No process-global
//! state; the caller threads the value through to wherever skip/xfail
//! marks are applied.

use serde::Serialize;

use crate::version::{VersionError, VersionToken};

/// What the hosting test framework should do with a test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "disposition", rename_all = "snake_case")]
pub enum Disposition {
    /// Run normally.
    Run,
    /// Skip with the given reason.
    Skip { reason: String },
    /// Run is expected to fail (or be withheld) for the given reason.
    Xfail { reason: String },
}

impl Disposition {
    pub fn should_run(&self) -> bool {
        matches!(self, Disposition::Run)
    }
}

/// Per-session skip/xfail decision source.
#[derive(Clone, Debug)]
pub struct Markers {
    suite_version: VersionToken,
    sdk_version: VersionToken,
}

impl Markers {
    pub fn new(suite_version: VersionToken, sdk_version: VersionToken) -> Self {
        Self {
            suite_version,
            sdk_version,
        }
    }

    /// Skip when the suite version is below `version`.
    pub fn skip_suites_below(&self, version: &str) -> Result<Disposition, VersionError> {
        let candidate: VersionToken = version.parse()?;
        Ok(if self.suite_version < candidate {
            Disposition::Skip {
                reason: format!("Only supported since suite version {version}"),
            }
        } else {
            Disposition::Run
        })
    }

    /// Skip when the SDK version is below `version`.
    pub fn skip_sdk_below(&self, version: &str) -> Result<Disposition, VersionError> {
        let candidate: VersionToken = version.parse()?;
        Ok(if self.sdk_version < candidate {
            Disposition::Skip {
                reason: format!("Only supported since SDK version {version}"),
            }
        } else {
            Disposition::Run
        })
    }

    /// Expected failure on the master suite.
    pub fn xfail_on_master(&self, reason: &str) -> Disposition {
        if self.suite_version.is_master() {
            Disposition::Xfail {
                reason: reason.to_string(),
            }
        } else {
            Disposition::Run
        }
    }

    /// Expected failure on the 4.3 suite.
    pub fn xfail_on_43(&self, reason: &str) -> Disposition {
        if self.suite_version == "4.3".parse().unwrap() {
            Disposition::Xfail {
                reason: reason.to_string(),
            }
        } else {
            Disposition::Run
        }
    }
}
