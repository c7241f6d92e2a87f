//! Version token comparison
//!
//! Orders the dotted version strings and the `master` sentinel used to
//! gate tests on suite and SDK versions.

mod token;

pub use token::{compare, is_below, VersionError, VersionToken};
