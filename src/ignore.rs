//! Extension ignore list
//!
//! An [`IgnoreSet`] holds normalized extensions (`.cpp`, `.json`, ...) whose
//! files are dropped from the tree and from the file count.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::string_utils::split_extension;

/// Token separators inside an ignore list: whitespace, commas and ampersands.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,&]+").expect("SEPARATORS regex is invalid"));

/// Sorted, deduplicated set of lowercase extensions, each with a leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IgnoreSet(BTreeSet<String>);

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text that follows an ignore directive.
    ///
    /// A single leading `:` is stripped. Tokens get a leading dot if they lack
    /// one and are lowercased; empty tokens are dropped. Never fails.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = raw.strip_prefix(':').unwrap_or(raw);

        SEPARATORS
            .split(raw)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(normalize_token)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.0.contains(&extension.to_lowercase())
    }

    /// Whether a file with this name should be hidden.
    ///
    /// Only the text after the final `.` counts; dotless names never match.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        match split_extension(file_name) {
            (_, Some(ext)) => self.contains(ext),
            (_, None) => false,
        }
    }
}

fn normalize_token(token: &str) -> String {
    if token.starts_with('.') {
        token.to_lowercase()
    } else {
        format!(".{}", token).to_lowercase()
    }
}

impl FromIterator<String> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for IgnoreSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ext) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ext)?;
        }
        Ok(())
    }
}
