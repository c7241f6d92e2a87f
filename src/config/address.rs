//! Address family selection
//!
//! The address family to use for all connections in a session, chosen
//! once when the suite configuration is built.

use std::fmt;

use serde::Serialize;

/// IPv4 or IPv6 session addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Inet,
    Inet6,
}

impl AddressFamily {
    /// The family name as used by iproute2 and guest tooling.
    pub fn family(&self) -> &'static str {
        match self {
            AddressFamily::Inet => "inet",
            AddressFamily::Inet6 => "inet6",
        }
    }

    pub fn is6(&self) -> bool {
        matches!(self, AddressFamily::Inet6)
    }

    /// The IP version digit, `"4"` or `"6"`.
    pub fn version(&self) -> &'static str {
        match self {
            AddressFamily::Inet => "4",
            AddressFamily::Inet6 => "6",
        }
    }

    /// Make an address usable inside a URL. IPv6 literals need brackets.
    pub fn urlize(&self, address: &str) -> String {
        if self.is6() {
            format!("[{address}]")
        } else {
            address.to_string()
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family())
    }
}
