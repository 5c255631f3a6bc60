//! Raw CSV rows and the field normalization rules shared by all importers.

use indexmap::IndexMap;
use serde::Serialize;

use super::error::{EntityKind, ImportError};

/// Values of `is_active` that normalize to `false` (compared lowercase).
pub const FALSE_VALUES: &[&str] = &["false", "0", "no", "n"];

/// One CSV record keyed by column header, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRow {
    /// 1-based line number of the record in the file (header = 1).
    pub line: u64,
    pub fields: IndexMap<String, String>,
}

impl RawRow {
    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(line: u64, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { line, fields }
    }

    /// The raw value of `column`, if the column exists on this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// The raw value of `column` when present and non-empty.
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    /// The whitespace-trimmed value of `column` when that is non-empty.
    pub fn trimmed(&self, column: &str) -> Option<&str> {
        self.get(column).map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Require a non-empty value, naming `field` in the error otherwise.
pub fn require<'a>(
    value: Option<&'a str>,
    entity: EntityKind,
    field: &'static str,
) -> Result<&'a str, ImportError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ImportError::MissingField { entity, field })
}

/// Parse an integer column. An absent column yields `0`; a present value
/// must parse as an integer once surrounding whitespace is removed.
pub fn parse_int_or_zero(value: Option<&str>, field: &'static str) -> Result<i32, ImportError> {
    match value {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|_| ImportError::TypeConversion {
                field,
                value: raw.to_string(),
                expected: "an integer",
            }),
    }
}

/// Normalize an `is_active` style flag. Absent or unrecognised values are
/// `true`; only the entries of [`FALSE_VALUES`] are `false`.
pub fn parse_is_active(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(raw) => {
            let lowered = raw.trim().to_lowercase();
            !FALSE_VALUES.contains(&lowered.as_str())
        }
    }
}

/// Normalize a date column. Empty means "no value"; anything else is passed
/// through untouched for the store to parse.
pub fn optional_date(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// A free-text column, empty when absent.
pub fn text_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::from_pairs(2, pairs.iter().copied())
    }

    #[test]
    fn row_accessors_distinguish_absent_and_empty() {
        let r = row(&[("name", ""), ("notes", "  hi  ")]);
        assert_eq!(r.get("name"), Some(""));
        assert_eq!(r.non_empty("name"), None);
        assert_eq!(r.get("missing"), None);
        assert_eq!(r.trimmed("notes"), Some("hi"));
        assert_eq!(r.non_empty("notes"), Some("  hi  "));
    }

    #[test]
    fn rows_keep_header_order() {
        let r = row(&[("b", "1"), ("a", "2")]);
        let keys: Vec<&str> = r.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn require_rejects_absent_and_empty() {
        assert_matches!(
            require(None, EntityKind::Cabin, "name"),
            Err(ImportError::MissingField { field: "name", .. })
        );
        assert_matches!(
            require(Some(""), EntityKind::Cabin, "name"),
            Err(ImportError::MissingField { .. })
        );
        assert_eq!(require(Some("Oak"), EntityKind::Cabin, "name"), Ok("Oak"));
    }

    #[test]
    fn int_defaults_to_zero_when_absent() {
        assert_eq!(parse_int_or_zero(None, "capacity"), Ok(0));
        assert_eq!(parse_int_or_zero(Some("12"), "capacity"), Ok(12));
        assert_eq!(parse_int_or_zero(Some(" 7 "), "capacity"), Ok(7));
    }

    #[test]
    fn int_rejects_non_numeric_and_empty() {
        assert_matches!(
            parse_int_or_zero(Some("ten"), "capacity"),
            Err(ImportError::TypeConversion { field: "capacity", ref value, .. }) if value == "ten"
        );
        assert_matches!(
            parse_int_or_zero(Some(""), "capacity"),
            Err(ImportError::TypeConversion { .. })
        );
        assert_matches!(
            parse_int_or_zero(Some("1.5"), "capacity"),
            Err(ImportError::TypeConversion { .. })
        );
    }

    #[test]
    fn is_active_false_values() {
        for v in ["No", "0", "false", "FALSE", "n", " no "] {
            assert!(!parse_is_active(Some(v)), "{v:?} should be false");
        }
    }

    #[test]
    fn is_active_true_values() {
        for v in ["Yes", "", "true", "1", "anything"] {
            assert!(parse_is_active(Some(v)), "{v:?} should be true");
        }
        assert!(parse_is_active(None));
    }

    #[test]
    fn dates_pass_through_unparsed() {
        assert_eq!(optional_date(None), None);
        assert_eq!(optional_date(Some("")), None);
        assert_eq!(optional_date(Some("   ")), None);
        assert_eq!(
            optional_date(Some("2025-06-30")),
            Some("2025-06-30".to_string())
        );
        assert_eq!(optional_date(Some("not a date")), Some("not a date".into()));
    }
}
