//! Operator glyph lookup.
//!
//! Maps ATOC operator codes to short chat glyphs. The table is plain data
//! injected into the formatter, not process-wide state, so tests and
//! alternative deployments can supply their own.

use std::collections::HashMap;

use crate::domain::AtocCode;

/// An immutable ATOC-code to display-glyph table.
///
/// Unknown codes simply have no glyph; lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct OperatorIcons {
    icons: HashMap<AtocCode, String>,
}

impl OperatorIcons {
    /// An empty table: no operator gets a glyph.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from (code, glyph) pairs.
    ///
    /// Pairs with an unparseable code are skipped.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let icons = pairs
            .into_iter()
            .filter_map(|(code, glyph)| {
                AtocCode::parse(code).ok().map(|c| (c, glyph.to_string()))
            })
            .collect();
        Self { icons }
    }

    /// The default table of UK operators, using chat shortcode glyphs.
    pub fn uk_default() -> Self {
        Self::from_pairs([
            ("AW", ":tfw:"),
            ("CC", ":c2c:"),
            ("CH", ":chiltern:"),
            ("EM", ":emr:"),
            ("GC", ":grandcentral:"),
            ("GN", ":greatnorthern:"),
            ("GR", ":lner:"),
            ("GW", ":gwr:"),
            ("GX", ":gatwickexpress:"),
            ("HT", ":hulltrains:"),
            ("HX", ":heathrowexpress:"),
            ("IL", ":islandline:"),
            ("LE", ":greateranglia:"),
            ("LM", ":wmr:"),
            ("LO", ":overground:"),
            ("ME", ":merseyrail:"),
            ("NT", ":northern:"),
            ("SE", ":southeastern:"),
            ("SN", ":southern:"),
            ("SR", ":scotrail:"),
            ("SW", ":swr:"),
            ("TL", ":thameslink:"),
            ("TP", ":tpe:"),
            ("VT", ":avanti:"),
            ("XC", ":crosscountry:"),
            ("XR", ":elizabethline:"),
        ])
    }

    /// Look up the glyph for an operator code.
    ///
    /// Returns `None` for unknown codes.
    pub fn get(&self, code: AtocCode) -> Option<&str> {
        self.icons.get(&code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoc(s: &str) -> AtocCode {
        AtocCode::parse(s).unwrap()
    }

    #[test]
    fn known_operator_has_glyph() {
        let icons = OperatorIcons::uk_default();
        assert_eq!(icons.get(atoc("GW")), Some(":gwr:"));
        assert_eq!(icons.get(atoc("GR")), Some(":lner:"));
    }

    #[test]
    fn unknown_operator_has_no_glyph() {
        let icons = OperatorIcons::uk_default();
        assert_eq!(icons.get(atoc("ZZ")), None);
    }

    #[test]
    fn empty_table_has_no_glyphs() {
        let icons = OperatorIcons::empty();
        assert_eq!(icons.get(atoc("GW")), None);
    }

    #[test]
    fn custom_pairs() {
        let icons = OperatorIcons::from_pairs([("GW", ":custom:")]);
        assert_eq!(icons.get(atoc("GW")), Some(":custom:"));
        assert_eq!(icons.get(atoc("GR")), None);
    }

    #[test]
    fn invalid_codes_in_pairs_are_skipped() {
        let icons = OperatorIcons::from_pairs([("GWR", ":bad:"), ("VT", ":avanti:")]);
        assert_eq!(icons.get(atoc("VT")), Some(":avanti:"));
    }
}
