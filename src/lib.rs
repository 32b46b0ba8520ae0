//! InterScan - render a directory as a color-annotated tree with extension filtering

pub mod driver;
pub mod error;
pub mod ignore;
pub mod input;
pub mod output;
pub mod string_utils;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use driver::{ScanRequest, prepare, scan};
pub use error::{Error, Result};
pub use ignore::IgnoreSet;
pub use input::{ParsedInput, parse_input, sanitize_path};
pub use output::{JsonFormatter, OutputConfig, StreamingFormatter, print_json};
pub use tree::{ListingMode, StreamingOutput, StreamingWalker, TraversalStats, WalkerConfig};
