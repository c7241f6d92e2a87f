//! Suite support library for oVirt system-test runs
//!
//! The fixture layers of the system-test suites own the domain objects
//! (hosts, VMs, networks, jobs) and the management SDK connection; this
//! crate carries the pieces underneath them:
//!
//! - [`sync`] — a blocking poll-until loop for awaiting eventual
//!   consistency of externally-mutated state
//! - [`version`] — ordering of dotted version tokens and the `master`
//!   sentinel
//! - [`markers`] — version-gated run/skip/xfail decisions
//! - [`config`] — the per-session suite configuration (`SUITE`,
//!   `IP_VERSION`, `OST_REPO_ROOT`) resolved once at startup

pub mod config;
pub mod markers;
pub mod sync;
pub mod utils;
pub mod version;

pub use config::{AddressFamily, ConfigError, SuiteConfig};
pub use markers::{Disposition, Markers};
pub use sync::{ErrorPolicy, SyncConfig, SyncError};
pub use version::{compare, is_below, VersionError, VersionToken};
