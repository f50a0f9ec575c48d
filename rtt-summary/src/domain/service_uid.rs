//! RTT service UID type.

use std::fmt;

/// Error returned when parsing an invalid service UID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service UID: {reason}")]
pub struct InvalidServiceUid {
    reason: &'static str,
}

/// A Realtime Trains service unique identifier.
///
/// UIDs are opaque identifiers assigned by RTT (usually a letter followed by
/// five digits, e.g. `"W12345"`, but the format is not guaranteed). Together
/// with a run date they identify a single train. The only validation is that
/// the string must be non-empty.
///
/// # Examples
///
/// ```
/// use rtt_summary::domain::ServiceUid;
///
/// let uid = ServiceUid::new("W12345".to_string()).unwrap();
/// assert_eq!(uid.as_str(), "W12345");
///
/// assert!(ServiceUid::new(String::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ServiceUid(String);

impl ServiceUid {
    /// Create a new service UID from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidServiceUid> {
        if s.is_empty() {
            return Err(InvalidServiceUid {
                reason: "service UID cannot be empty",
            });
        }
        Ok(ServiceUid(s))
    }

    /// Returns the service UID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceUid({})", self.0)
    }
}

impl fmt::Display for ServiceUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
