//! Suite configuration
//!
//! Resolves the suite name, suite version, address family and repo
//! paths once at session start into an explicit value that callers
//! thread through, instead of reading the environment ad hoc.

mod address;
mod env;

pub use address::AddressFamily;
pub use env::{EnvBuilder, EnvGuard, EnvSnapshot, IP_VERSION_VAR, REPO_ROOT_VAR, SUITE_VAR};

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::version::{VersionError, VersionToken};

const DEFAULT_IP_VERSION: &str = "4";

/// Resolved per-session suite configuration.
#[derive(Clone, Debug, Serialize)]
pub struct SuiteConfig {
    /// Full suite name, e.g. `network-suite-master`.
    pub suite: String,

    /// Version token taken from the suite name's last `-` segment.
    pub suite_version: VersionToken,

    /// Address family for all connections in the session.
    pub address_family: AddressFamily,

    /// Checkout root containing the per-suite directories, when known.
    pub repo_root: Option<PathBuf>,
}

impl SuiteConfig {
    /// Build from the current process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_snapshot(EnvSnapshot::capture())
    }

    /// Build from a captured environment snapshot.
    pub fn from_snapshot(snap: EnvSnapshot) -> Result<Self, ConfigError> {
        let suite = snap.suite.ok_or(ConfigError::MissingSuite)?;

        let version_token = suite.rsplit('-').next().unwrap_or(&suite);
        let suite_version: VersionToken = version_token
            .parse()
            .map_err(|source| ConfigError::BadSuiteVersion {
                suite: suite.clone(),
                source,
            })?;

        let address_family = match snap.ip_version.as_deref() {
            None | Some("4") => AddressFamily::Inet,
            Some("6") => AddressFamily::Inet6,
            Some(other) => {
                warn!(
                    "suite invoked with unsupported IP version {:?}, using version {}",
                    other, DEFAULT_IP_VERSION
                );
                AddressFamily::Inet
            }
        };

        Ok(Self {
            suite,
            suite_version,
            address_family,
            repo_root: snap.repo_root.map(PathBuf::from),
        })
    }

    /// Directory of the running suite inside the checkout.
    pub fn suite_dir(&self) -> Result<PathBuf, ConfigError> {
        let root = self
            .repo_root
            .as_ref()
            .ok_or(ConfigError::MissingRepoRoot)?;
        Ok(root.join(&self.suite))
    }

    /// Ansible playbook directory of the running suite.
    pub fn playbook_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.suite_dir()?.join("ansible"))
    }
}

/// Suite configuration failure, distinct from any test failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SUITE environment variable is not set")]
    MissingSuite,

    #[error("suite name {suite:?} does not end in a version token")]
    BadSuiteVersion {
        suite: String,
        source: VersionError,
    },

    #[error("OST_REPO_ROOT environment variable is not set")]
    MissingRepoRoot,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(suite: &str) -> EnvSnapshot {
        EnvSnapshot {
            suite: Some(suite.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_master_suite() {
        let config = SuiteConfig::from_snapshot(snapshot("network-suite-master")).unwrap();
        assert_eq!(config.suite, "network-suite-master");
        assert!(config.suite_version.is_master());
        assert_eq!(config.address_family, AddressFamily::Inet);
    }

    #[test]
    fn test_versioned_suite() {
        let config = SuiteConfig::from_snapshot(snapshot("basic-suite-4.3")).unwrap();
        assert_eq!(config.suite_version, "4.3".parse().unwrap());
    }

    #[test]
    fn test_missing_suite_is_an_error() {
        let err = SuiteConfig::from_snapshot(EnvSnapshot::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSuite));
    }

    #[test]
    fn test_unparseable_suite_version_is_an_error() {
        let err = SuiteConfig::from_snapshot(snapshot("network-suite-devel")).unwrap_err();
        assert!(matches!(err, ConfigError::BadSuiteVersion { .. }));
    }

    #[test]
    fn test_ip_version_selection() {
        let mut snap = snapshot("network-suite-master");
        snap.ip_version = Some("6".to_string());
        let config = SuiteConfig::from_snapshot(snap).unwrap();
        assert_eq!(config.address_family, AddressFamily::Inet6);
    }

    #[test]
    fn test_unsupported_ip_version_falls_back_to_4() {
        let mut snap = snapshot("network-suite-master");
        snap.ip_version = Some("5".to_string());
        let config = SuiteConfig::from_snapshot(snap).unwrap();
        assert_eq!(config.address_family, AddressFamily::Inet);
    }

    #[test]
    fn test_suite_paths() {
        let mut snap = snapshot("network-suite-master");
        snap.repo_root = Some("/var/lib/ost".to_string());
        let config = SuiteConfig::from_snapshot(snap).unwrap();
        assert_eq!(
            config.suite_dir().unwrap(),
            PathBuf::from("/var/lib/ost/network-suite-master")
        );
        assert_eq!(
            config.playbook_dir().unwrap(),
            PathBuf::from("/var/lib/ost/network-suite-master/ansible")
        );
    }

    #[test]
    fn test_missing_repo_root_is_an_error() {
        let config = SuiteConfig::from_snapshot(snapshot("network-suite-master")).unwrap();
        assert!(matches!(
            config.suite_dir().unwrap_err(),
            ConfigError::MissingRepoRoot
        ));
    }

    #[test]
    fn test_from_env_round_trip() {
        let _guard = EnvBuilder::new()
            .suite("ansible-suite-master")
            .ip_version("4")
            .repo_root("/tmp/ost")
            .apply_scoped();

        let config = SuiteConfig::from_env().unwrap();
        assert_eq!(config.suite, "ansible-suite-master");
        assert!(config.suite_version.is_master());
        assert_eq!(config.repo_root, Some(PathBuf::from("/tmp/ost")));
    }
}
