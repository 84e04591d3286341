//! Target name handling.
//!
//! A name typed by an observer or read from an uploaded file goes through
//! [`sanitize_name`] before anything else. The sanitized form is what the name
//! resolver is queried with; [`catalog_label`] derives from it the label
//! written to the `Name` column of the catalog.

/// Characters removed from anywhere inside a name. The comma separates names
/// in a typed list and must never reach a catalog label.
const STRIPPED_CHARS: [char; 6] = ['\'', '"', '*', ',', '\n', '\r'];

/// Remove surrounding whitespace, quotes, asterisks, commas and line breaks from a name.
///
/// Interior spaces are kept ("alf Sco" stays "alf Sco") because the name
/// resolver needs them. The function is idempotent.
///
/// Arguments
/// ---------
/// * `raw`: the name as typed or read from a file
///
/// Return
/// ------
/// * the sanitized name, possibly empty
pub fn sanitize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Label written to the `Name` column: the sanitized name without any whitespace.
pub fn catalog_label(name: &str) -> String {
    sanitize_name(name)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Split a comma-separated list of names, as typed in a text field or read
/// from an uploaded text file.
///
/// Each element is sanitized; elements left empty (a trailing comma, a blank
/// line) are dropped.
///
/// Arguments
/// ---------
/// * `raw`: the comma-separated names, optionally quoted, possibly over several lines
///
/// Return
/// ------
/// * the sanitized names, in input order
pub fn split_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(sanitize_name)
        .filter(|name| !name.is_empty())
        .collect()
}
