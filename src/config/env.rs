//! Environment variable snapshot
//!
//! Reads the suite environment once into plain data. Tests construct
//! the snapshot directly instead of mutating process state.

use std::env;

/// `SUITE` environment variable.
pub const SUITE_VAR: &str = "SUITE";
/// `IP_VERSION` environment variable, `"4"` or `"6"`.
pub const IP_VERSION_VAR: &str = "IP_VERSION";
/// `OST_REPO_ROOT` environment variable.
pub const REPO_ROOT_VAR: &str = "OST_REPO_ROOT";

/// One read of the suite-relevant environment variables.
#[derive(Clone, Debug, Default)]
pub struct EnvSnapshot {
    /// Suite name, e.g. `network-suite-master`.
    pub suite: Option<String>,
    /// Requested IP version, `"4"` or `"6"`.
    pub ip_version: Option<String>,
    /// Checkout root containing the per-suite directories.
    pub repo_root: Option<String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            suite: env::var(SUITE_VAR).ok(),
            ip_version: env::var(IP_VERSION_VAR).ok(),
            repo_root: env::var(REPO_ROOT_VAR).ok(),
        }
    }
}

/// Builder for setting suite environment variables (useful for testing).
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn suite(mut self, suite: impl Into<String>) -> Self {
        self.vars.push((SUITE_VAR.to_string(), suite.into()));
        self
    }

    pub fn ip_version(mut self, version: impl Into<String>) -> Self {
        self.vars.push((IP_VERSION_VAR.to_string(), version.into()));
        self
    }

    pub fn repo_root(mut self, root: impl Into<String>) -> Self {
        self.vars.push((REPO_ROOT_VAR.to_string(), root.into()));
        self
    }

    /// Apply and return a guard that restores the previous values on drop.
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        for (key, value) in &self.vars {
            env::set_var(key, value);
        }

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop.
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty() {
        let snap = EnvSnapshot::default();
        assert!(snap.suite.is_none());
        assert!(snap.ip_version.is_none());
        assert!(snap.repo_root.is_none());
    }
}
