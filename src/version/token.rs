//! Version token grammar and ordering
//!
//! A token is either a dotted numeric version (`4.3`, `4.10.1`) or the
//! sentinel `master`, which orders strictly above every release.
//! Components compare numerically, so `4.10` > `4.9`, and missing
//! trailing components are zero, so `4.3` < `4.3.1`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A suite or SDK version identifier.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VersionToken {
    /// The unbounded/newest version.
    Master,
    /// A dotted numeric release version.
    Release(Vec<u64>),
}

impl VersionToken {
    pub fn is_master(&self) -> bool {
        matches!(self, VersionToken::Master)
    }
}

impl FromStr for VersionToken {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "master" {
            return Ok(VersionToken::Master);
        }
        if s.is_empty() {
            return Err(VersionError::Malformed(s.to_string()));
        }
        let components = s
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| VersionError::Malformed(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(VersionToken::Release(components))
    }
}

impl TryFrom<String> for VersionToken {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<VersionToken> for String {
    fn from(token: VersionToken) -> Self {
        token.to_string()
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionToken::Master => f.write_str("master"),
            VersionToken::Release(components) => {
                let parts: Vec<String> = components.iter().map(u64::to_string).collect();
                f.write_str(&parts.join("."))
            }
        }
    }
}

impl Ord for VersionToken {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (VersionToken::Master, VersionToken::Master) => Ordering::Equal,
            (VersionToken::Master, VersionToken::Release(_)) => Ordering::Greater,
            (VersionToken::Release(_), VersionToken::Master) => Ordering::Less,
            (VersionToken::Release(a), VersionToken::Release(b)) => {
                let len = a.len().max(b.len());
                for i in 0..len {
                    let left = a.get(i).copied().unwrap_or(0);
                    let right = b.get(i).copied().unwrap_or(0);
                    match left.cmp(&right) {
                        Ordering::Equal => continue,
                        unequal => return unequal,
                    }
                }
                Ordering::Equal
            }
        }
    }
}

impl PartialOrd for VersionToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 4.3 and 4.3.0 are the same version, so equality must follow the
// zero-padded ordering rather than a structural derive.
impl PartialEq for VersionToken {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Three-way comparison of two raw tokens.
///
/// Identical strings compare equal without parsing; otherwise both
/// sides must be well-formed tokens, and a malformed one is an error
/// rather than a silently misordered gate.
pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
    if a == b {
        return Ok(Ordering::Equal);
    }
    let left: VersionToken = a.parse()?;
    let right: VersionToken = b.parse()?;
    Ok(left.cmp(&right))
}

/// Whether version `a` orders strictly below version `b`.
pub fn is_below(a: &str, b: &str) -> Result<bool, VersionError> {
    Ok(compare(a, b)? == Ordering::Less)
}

/// Version token grammar violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("malformed version token {0:?}: expected dotted numerics or \"master\"")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_tokens_compare_equal() {
        assert_eq!(compare("4.3", "4.3").unwrap(), Ordering::Equal);
        assert_eq!(compare("master", "master").unwrap(), Ordering::Equal);
        // Raw equality short-circuits before the grammar check.
        assert_eq!(compare("weird", "weird").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_master_is_greatest() {
        assert_eq!(compare("master", "4.99").unwrap(), Ordering::Greater);
        assert_eq!(compare("4.99", "master").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        assert_eq!(compare("4.10", "4.9").unwrap(), Ordering::Greater);
        assert_eq!(compare("4.9", "4.10").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_missing_components_are_zero() {
        assert_eq!(compare("4.3", "4.3.1").unwrap(), Ordering::Less);
        assert_eq!(compare("4.3.0", "4.3").unwrap(), Ordering::Equal);
        let a: VersionToken = "4.3".parse().unwrap();
        let b: VersionToken = "4.3.0".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_comparator_is_pure() {
        assert_eq!(compare("4.4", "4.3").unwrap(), compare("4.4", "4.3").unwrap());
    }

    #[test]
    fn test_malformed_tokens_fail_fast() {
        assert!(matches!(
            compare("4.x", "4.3"),
            Err(VersionError::Malformed(_))
        ));
        assert!(matches!(
            compare("4.3", "devel"),
            Err(VersionError::Malformed(_))
        ));
        assert!("".parse::<VersionToken>().is_err());
        assert!("4..3".parse::<VersionToken>().is_err());
    }

    #[test]
    fn test_is_below() {
        assert!(is_below("4.3", "4.4").unwrap());
        assert!(!is_below("4.4", "4.4").unwrap());
        assert!(!is_below("master", "4.4").unwrap());
    }

    #[test]
    fn test_display_round_trip() {
        let token: VersionToken = "4.10.1".parse().unwrap();
        assert_eq!(token.to_string(), "4.10.1");
        assert_eq!(VersionToken::Master.to_string(), "master");
    }

    #[test]
    fn test_serde_as_string() {
        let token: VersionToken = "4.3".parse().unwrap();
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"4.3\"");
        let parsed: VersionToken = serde_json::from_str("\"master\"").unwrap();
        assert!(parsed.is_master());
    }
}
