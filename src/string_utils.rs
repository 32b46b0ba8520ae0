//! String utility functions for common string operations.

/// Return the first prefix that `s` starts with, compared ASCII case-insensitively.
///
/// Prefixes are tried in order, so longer alternatives must come first when
/// one prefix is itself a prefix of another.
///
/// # Example
///
/// ```
/// use interscan::string_utils::match_any_prefix;
///
/// const TOKENS: &[&str] = &["--ignore:", "--ignore"];
/// assert_eq!(match_any_prefix("--IGNORE: cpp", TOKENS), Some("--ignore:"));
/// assert_eq!(match_any_prefix("--ignore cpp", TOKENS), Some("--ignore"));
/// assert_eq!(match_any_prefix("-ignore", TOKENS), None);
/// ```
pub fn match_any_prefix<'p>(s: &str, prefixes: &[&'p str]) -> Option<&'p str> {
    let bytes = s.as_bytes();
    prefixes.iter().copied().find(|prefix| {
        bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    })
}

/// Split a file name at its final `.` into stem and extension.
///
/// The extension keeps its leading dot. Names without a dot have no extension;
/// dotfiles such as `.gitignore` have an empty stem.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(pos) => (&name[..pos], Some(&name[pos..])),
        None => (name, None),
    }
}

/// Strip at most one leading and one trailing quote character (`"` or `'`).
///
/// The two ends are independent; a leading quote need not be paired.
pub fn strip_outer_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}
