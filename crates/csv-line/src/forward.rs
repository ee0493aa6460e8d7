//! Forward conversion: field → CSV text.
//!
//! This module provides the escaper, the inverse of the tokenizer in
//! [`crate::reverse`].

use std::borrow::Cow;

/// Whether a value must be wrapped in quotes to survive tokenizing.
pub fn needs_quoting(value: &str) -> bool {
    value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
}

/// Escape a value for CSV (double quotes and add quotes if needed).
///
/// An absent or empty value escapes to the empty string. Values that need no
/// quoting are returned borrowed.
///
/// ```
/// use csv_line::escape_field;
///
/// assert_eq!(escape_field("plain"), "plain");
/// assert_eq!(escape_field("hello, world"), "\"hello, world\"");
/// assert_eq!(escape_field("a\"b"), "\"a\"\"b\"");
/// assert_eq!(escape_field(None), "");
/// ```
pub fn escape_field<'a>(value: impl Into<Option<&'a str>>) -> Cow<'a, str> {
    match value.into() {
        None => Cow::Borrowed(""),
        Some(value) if needs_quoting(value) => {
            Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
        }
        Some(value) => Cow::Borrowed(value),
    }
}

/// Convert a record to a CSV line.
///
/// Fields are escaped and joined with `,`; there is no trailing delimiter.
pub fn escape_record<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            line.push(',');
        }
        line.push_str(&escape_field(field.as_ref()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_field_no_escape() {
        assert_eq!(escape_field("plain"), "plain");
        assert!(matches!(escape_field("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_field_absent_and_empty() {
        assert_eq!(escape_field(None), "");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_escape_field_with_comma() {
        assert_eq!(escape_field("hello, world"), "\"hello, world\"");
    }

    #[test]
    fn test_escape_field_with_quotes() {
        assert_eq!(escape_field("a\"b"), "\"a\"\"b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("\""), "\"\"\"\"");
    }

    #[test]
    fn test_escape_field_with_line_terminators() {
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(escape_field("line1\r\nline2"), "\"line1\r\nline2\"");
        assert_eq!(escape_field("\r"), "\"\r\"");
    }

    #[test]
    fn test_escaping_is_not_idempotent() {
        let once = escape_field("a,b").into_owned();
        let twice = escape_field(once.as_str()).into_owned();
        assert_eq!(once, "\"a,b\"");
        assert_eq!(twice, "\"\"\"a,b\"\"\"");
    }

    #[test]
    fn test_escape_record() {
        assert_eq!(escape_record(["Alice", "30", "true"]), "Alice,30,true");
        assert_eq!(
            escape_record(vec!["Hello, World".to_string(), "42".to_string()]),
            "\"Hello, World\",42"
        );
    }

    #[test]
    fn test_escape_record_empty_fields() {
        assert_eq!(escape_record(["a", ""]), "a,");
        assert_eq!(escape_record(["", "", ""]), ",,");
        assert_eq!(escape_record(Vec::<String>::new()), "");
    }
}
