//! Skip and xfail decisions
//!
//! Decides whether a test should run, be skipped, or be expected to
//! fail for the current suite and SDK versions.

mod disposition;

pub use disposition::{Disposition, Markers};
