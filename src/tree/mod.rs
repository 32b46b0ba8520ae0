//! Directory tree walking logic
//!
//! - `listing` reads one directory into a sorted list of entries
//! - `StreamingWalker` recurses depth-first over those listings and streams
//!   each visible entry to a [`StreamingOutput`] sink, counting as it goes

mod config;
mod listing;
mod streaming;
mod utils;

// Re-export public types
pub use config::{DEFAULT_MAX_DEPTH, ListingMode, WalkerConfig};
pub use listing::{DirectoryEntry, EntryKind, compare_names, list_directory};
pub use streaming::{NodeInfo, StreamingOutput, StreamingWalker, TraversalStats};
pub use utils::{BRANCH, BRANCH_LAST, branch_marker, child_prefix};
