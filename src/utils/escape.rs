//! Field escaping for the merged delimited-text document.
//!
//! Only the text artifact goes through here. Spreadsheet cells take the raw
//! value, the workbook format has no delimiter to protect.

use std::borrow::Cow;

/// Escapes one text field for the comma-delimited document.
///
/// A missing value becomes an empty field. A value containing a comma, a
/// double quote, `\n` or `\r` is wrapped in double quotes with every inner
/// quote doubled. Anything else is returned unchanged (and unallocated).
///
/// # Examples
///
/// ```
/// use record_export::utils::escape_delimited_text;
///
/// assert_eq!(escape_delimited_text(None), "");
/// assert_eq!(escape_delimited_text(Some("plain")), "plain");
/// assert_eq!(escape_delimited_text(Some("a,b")), "\"a,b\"");
/// assert_eq!(escape_delimited_text(Some("say \"hi\"")), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_delimited_text(value: Option<&str>) -> Cow<'_, str> {
    let Some(value) = value else {
        return Cow::Borrowed("");
    };

    if needs_quoting(value) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn needs_quoting(value: &str) -> bool {
    value.contains([',', '"', '\n', '\r'])
}
