//! Configuration types for tree walkers

use crate::ignore::IgnoreSet;

/// Default recursion limit; deep enough for any real tree, shallow enough
/// to stop a symlink cycle long before the stack runs out.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// What to do with a directory whose listing cannot be opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingMode {
    /// Render it as an empty folder.
    #[default]
    Silent,
    /// Render it with a note saying why it could not be read.
    Mark,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Files whose extension is in this set are skipped and not counted.
    pub ignore: IgnoreSet,
    /// Maximum nesting of directories below the root.
    pub max_depth: usize,
    pub listing_mode: ListingMode,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore: IgnoreSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            listing_mode: ListingMode::Silent,
        }
    }
}
