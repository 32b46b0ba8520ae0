//! Input-to-tree orchestration
//!
//! [`prepare`] validates a raw input line; [`scan`] runs the whole pipeline
//! against any [`StreamingOutput`] sink.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::ignore::IgnoreSet;
use crate::input::{ParsedInput, parse_input};
use crate::tree::{StreamingOutput, StreamingWalker, TraversalStats, WalkerConfig};

/// A validated scan: an existing directory plus the extensions to hide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub root: PathBuf,
    /// Last path component as typed, used for display.
    pub root_name: String,
    pub ignore: IgnoreSet,
}

/// Parse and validate one input line.
pub fn prepare(line: &str) -> Result<ScanRequest> {
    if line.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let ParsedInput { path, ignore } = parse_input(line);
    let root = PathBuf::from(&path);
    if path.is_empty() || !root.is_dir() {
        return Err(Error::InvalidPath(root));
    }

    log::debug!("scanning '{}' ignoring [{}]", root.display(), ignore);
    Ok(ScanRequest {
        root_name: root_display_name(&path),
        root,
        ignore,
    })
}

/// Name shown on the root line: the text after the last `/` or `\`, or the
/// whole path when that is empty (e.g. `C:\` or `/`).
pub fn root_display_name(path: &str) -> String {
    let name = match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    if name.is_empty() {
        path.to_string()
    } else {
        name.to_string()
    }
}

/// Run the full pipeline for one input line.
///
/// The ignore list parsed from the line replaces `config.ignore`.
pub fn scan<O: StreamingOutput>(
    line: &str,
    config: WalkerConfig,
    output: &mut O,
) -> Result<TraversalStats> {
    let request = prepare(line)?;
    let walker = StreamingWalker::new(WalkerConfig {
        ignore: request.ignore,
        ..config
    });
    let stats = walker.walk_streaming(&request.root, &request.root_name, output)?;
    log::info!(
        "scanned '{}': {} folders, {} files",
        request.root.display(),
        stats.folders,
        stats.files
    );
    Ok(stats)
}
