//! Train operator (ATOC) code type.

use std::fmt;

/// Error returned when parsing an invalid ATOC code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ATOC code: {reason}")]
pub struct InvalidAtocCode {
    reason: &'static str,
}

/// A valid 2-letter ATOC (Association of Train Operating Companies) code.
///
/// ATOC codes identify train operating companies (e.g. "GW" for Great
/// Western Railway, "GR" for LNER). RTT reports them uppercase; parsing
/// accepts either case and normalises.
///
/// # Examples
///
/// ```
/// use rtt_summary::domain::AtocCode;
///
/// let gw = AtocCode::parse("GW").unwrap();
/// assert_eq!(gw.as_str(), "GW");
/// assert_eq!(AtocCode::parse("gw").unwrap(), gw);
///
/// assert!(AtocCode::parse("GWR").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtocCode([u8; 2]);

impl AtocCode {
    /// Parse an ATOC code from a string.
    ///
    /// The input must be exactly 2 ASCII letters in either case.
    pub fn parse(s: &str) -> Result<Self, InvalidAtocCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidAtocCode {
                reason: "must be exactly 2 characters",
            });
        }

        let mut out = [0u8; 2];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidAtocCode {
                    reason: "must be ASCII letters A-Z",
                });
            }
            out[i] = b.to_ascii_uppercase();
        }

        Ok(AtocCode(out))
    }

    /// Returns the ATOC code as an uppercase string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for AtocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtocCode({})", self.as_str())
    }
}

impl fmt::Display for AtocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_real_operator_codes() {
        assert!(AtocCode::parse("GW").is_ok()); // Great Western Railway
        assert!(AtocCode::parse("GR").is_ok()); // LNER
        assert!(AtocCode::parse("VT").is_ok()); // Avanti West Coast
        assert!(AtocCode::parse("XC").is_ok()); // CrossCountry
        assert!(AtocCode::parse("SE").is_ok()); // Southeastern
    }

    #[test]
    fn lowercase_is_normalised() {
        assert_eq!(AtocCode::parse("gw").unwrap().as_str(), "GW");
        assert_eq!(AtocCode::parse("Gw").unwrap(), AtocCode::parse("GW").unwrap());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AtocCode::parse("").is_err());
        assert!(AtocCode::parse("G").is_err());
        assert!(AtocCode::parse("GWR").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AtocCode::parse("G1").is_err());
        assert!(AtocCode::parse("12").is_err());
        assert!(AtocCode::parse("G ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = AtocCode::parse("vt").unwrap();
        assert_eq!(format!("{}", code), "VT");
        assert_eq!(format!("{:?}", code), "AtocCode(VT)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 2-letter string parses, regardless of case
        #[test]
        fn mixed_case_always_parses(s in "[a-zA-Z]{2}") {
            prop_assert!(AtocCode::parse(&s).is_ok());
        }

        /// Result is always the uppercased input
        #[test]
        fn normalises_to_uppercase(s in "[a-zA-Z]{2}") {
            let code = AtocCode::parse(&s).unwrap();
            let upper = s.to_ascii_uppercase();
            prop_assert_eq!(code.as_str(), upper.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,1}|[A-Z]{3,10}") {
            prop_assert!(AtocCode::parse(&s).is_err());
        }
    }
}
