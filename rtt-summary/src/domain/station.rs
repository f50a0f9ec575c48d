//! Station code and station reference types.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code: {reason}")]
pub struct InvalidCrs {
    reason: &'static str,
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// Parsing is case-insensitive because user-supplied codes arrive in
/// whatever case the user typed; the stored form is always uppercase, so
/// two `Crs` values compare equal regardless of input case.
///
/// # Examples
///
/// ```
/// use rtt_summary::domain::Crs;
///
/// let kgx = Crs::parse("KGX").unwrap();
/// assert_eq!(kgx.as_str(), "KGX");
///
/// // Lowercase input is normalised
/// assert_eq!(Crs::parse("kgx").unwrap(), kgx);
///
/// // Wrong length is rejected
/// assert!(Crs::parse("KG").is_err());
/// assert!(Crs::parse("KGXX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 ASCII letters in either case.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCrs {
                reason: "must be exactly 3 characters",
            });
        }

        let mut out = [0u8; 3];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidCrs {
                    reason: "must be ASCII letters A-Z",
                });
            }
            out[i] = b.to_ascii_uppercase();
        }

        Ok(Crs(out))
    }

    /// Returns the CRS code as an uppercase string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved station: its CRS code plus the upstream display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRef {
    /// Station CRS code
    pub crs: Crs,
    /// Human-readable station name (e.g. "London Kings Cross")
    pub name: String,
}

impl StationRef {
    /// Creates a new station reference.
    pub fn new(crs: Crs, name: impl Into<String>) -> Self {
        Self {
            crs,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_crs() {
        assert!(Crs::parse("KGX").is_ok());
        assert!(Crs::parse("PAD").is_ok());
        assert!(Crs::parse("WDB").is_ok());
        assert!(Crs::parse("AAA").is_ok());
        assert!(Crs::parse("ZZZ").is_ok());
    }

    #[test]
    fn lowercase_is_normalised() {
        assert_eq!(Crs::parse("kgx").unwrap().as_str(), "KGX");
        assert_eq!(Crs::parse("Kgx").unwrap().as_str(), "KGX");
        assert_eq!(Crs::parse("kgX").unwrap(), Crs::parse("KGX").unwrap());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Crs::parse("").is_err());
        assert!(Crs::parse("K").is_err());
        assert!(Crs::parse("KG").is_err());
        assert!(Crs::parse("KGXX").is_err());
        assert!(Crs::parse("KINGS").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Crs::parse("K1X").is_err());
        assert!(Crs::parse("K-X").is_err());
        assert!(Crs::parse("K X").is_err());
        assert!(Crs::parse("KÖX").is_err());
    }

    #[test]
    fn display_and_debug() {
        let crs = Crs::parse("pad").unwrap();
        assert_eq!(format!("{}", crs), "PAD");
        assert_eq!(format!("{:?}", crs), "Crs(PAD)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Crs::parse("KGX").unwrap());
        assert!(set.contains(&Crs::parse("kgx").unwrap()));
        assert!(!set.contains(&Crs::parse("PAD").unwrap()));
    }

    #[test]
    fn station_ref() {
        let station = StationRef::new(Crs::parse("KGX").unwrap(), "London Kings Cross");
        assert_eq!(station.name, "London Kings Cross");
        assert_eq!(station.crs.as_str(), "KGX");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 3-letter string parses, regardless of case
        #[test]
        fn mixed_case_always_parses(s in "[a-zA-Z]{3}") {
            prop_assert!(Crs::parse(&s).is_ok());
        }

        /// Parsing is case-insensitive: result is always the uppercased input
        #[test]
        fn normalises_to_uppercase(s in "[a-zA-Z]{3}") {
            let crs = Crs::parse(&s).unwrap();
            let upper = s.to_ascii_uppercase();
            prop_assert_eq!(crs.as_str(), upper.as_str());
        }

        /// Different cases of the same code compare equal
        #[test]
        fn case_variants_equal(s in "[A-Z]{3}") {
            let upper = Crs::parse(&s).unwrap();
            let lower = Crs::parse(&s.to_ascii_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(Crs::parse(&s).is_err());
        }

        /// Strings containing digits are rejected
        #[test]
        fn digits_rejected(s in "[A-Z0-9]{3}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(Crs::parse(&s).is_err());
        }
    }
}
