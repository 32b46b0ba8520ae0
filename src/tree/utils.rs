//! Shared utility functions for tree walking

/// Branch marker for a sibling that has more siblings after it.
pub const BRANCH: &str = "|-->";
/// Branch marker for the last sibling in a directory.
pub const BRANCH_LAST: &str = "#-->";

const INDENT: &str = "|    ";
const INDENT_LAST: &str = "     ";

/// Branch marker for an entry.
pub fn branch_marker(is_last: bool) -> &'static str {
    if is_last { BRANCH_LAST } else { BRANCH }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, INDENT_LAST)
    } else {
        format!("{}{}", prefix, INDENT)
    }
}
