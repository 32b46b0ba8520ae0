//! StreamingWalker - streams output without building full tree in memory

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::ignore::IgnoreSet;

use super::config::{ListingMode, WalkerConfig};
use super::listing::{DirectoryEntry, EntryKind, list_directory};
use super::utils::child_prefix;

/// Folder and file counters threaded through one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    pub folders: usize,
    pub files: usize,
}

/// Everything a sink needs to render one visible entry.
#[derive(Debug, Clone, Copy)]
pub struct NodeInfo<'a> {
    pub name: &'a str,
    pub kind: EntryKind,
    pub is_last: bool,
    /// Accumulated ancestor prefix, without this entry's branch marker.
    pub prefix: &'a str,
    /// 1 for direct children of the root.
    pub depth: usize,
    /// Set for directories whose listing failed while in [`ListingMode::Mark`].
    pub unreadable: Option<&'a io::Error>,
}

impl NodeInfo<'_> {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    /// Called once before any node, with the root's display name.
    fn output_root(
        &mut self,
        name: &str,
        ignore: &IgnoreSet,
        unreadable: Option<&io::Error>,
    ) -> io::Result<()>;

    /// Called for every visible entry in depth-first pre-order.
    fn output_node(&mut self, node: &NodeInfo<'_>) -> io::Result<()>;

    fn finish(&mut self, stats: &TraversalStats) -> io::Result<()>;
}

/// Streaming tree walker that outputs directly without building tree in memory.
/// Uses O(depth) memory: one sorted listing per active level.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream every visible entry to `output`.
    ///
    /// `root_name` is only used for display. Returns the final counters, or
    /// the first error from the sink or the depth guard; anything already
    /// streamed stays streamed.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        root_name: &str,
        output: &mut O,
    ) -> Result<TraversalStats> {
        let mut stats = TraversalStats::default();

        let (entries, unreadable) = self.open_dir(root);
        output.output_root(root_name, &self.config.ignore, unreadable.as_ref())?;
        self.walk_entries(entries, "", 0, &mut stats, output)?;

        output.finish(&stats)?;
        Ok(stats)
    }

    fn walk_entries<O: StreamingOutput>(
        &self,
        entries: Vec<DirectoryEntry>,
        prefix: &str,
        depth: usize,
        stats: &mut TraversalStats,
        output: &mut O,
    ) -> Result<()> {
        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            // Decided before filtering: an ignored last file still leaves
            // its predecessor on a `|-->` branch.
            let is_last = i + 1 == total;

            match entry.kind {
                EntryKind::Directory => {
                    if depth + 1 > self.config.max_depth {
                        return Err(Error::DepthLimitExceeded {
                            path: entry.path,
                            limit: self.config.max_depth,
                        });
                    }

                    let (children, unreadable) = self.open_dir(&entry.path);
                    stats.folders += 1;
                    output.output_node(&NodeInfo {
                        name: &entry.name,
                        kind: entry.kind,
                        is_last,
                        prefix,
                        depth: depth + 1,
                        unreadable: unreadable.as_ref(),
                    })?;

                    let new_prefix = child_prefix(prefix, is_last);
                    self.walk_entries(children, &new_prefix, depth + 1, stats, output)?;
                }
                EntryKind::File => {
                    if self.config.ignore.matches(&entry.name) {
                        log::trace!("ignoring '{}'", entry.path.display());
                        continue;
                    }

                    stats.files += 1;
                    output.output_node(&NodeInfo {
                        name: &entry.name,
                        kind: entry.kind,
                        is_last,
                        prefix,
                        depth: depth + 1,
                        unreadable: None,
                    })?;
                }
            }
        }

        Ok(())
    }

    /// List a directory, turning failure into an empty listing.
    ///
    /// The error is handed back only in [`ListingMode::Mark`].
    fn open_dir(&self, path: &Path) -> (Vec<DirectoryEntry>, Option<io::Error>) {
        match list_directory(path) {
            Ok(entries) => (entries, None),
            Err(e) => {
                log::debug!("cannot list '{}': {}", path.display(), e);
                match self.config.listing_mode {
                    ListingMode::Silent => (Vec::new(), None),
                    ListingMode::Mark => (Vec::new(), Some(e)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::utils::branch_marker;

    /// Records every callback as a plain line for assertions.
    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
        finished: Option<TraversalStats>,
    }

    impl StreamingOutput for Recorder {
        fn output_root(
            &mut self,
            name: &str,
            ignore: &IgnoreSet,
            unreadable: Option<&io::Error>,
        ) -> io::Result<()> {
            self.lines.push(format!(
                "root {} [{}]{}",
                name,
                ignore,
                if unreadable.is_some() { " unreadable" } else { "" }
            ));
            Ok(())
        }

        fn output_node(&mut self, node: &NodeInfo<'_>) -> io::Result<()> {
            let marker = branch_marker(node.is_last);
            let name = if node.is_dir() {
                format!("[{}]", node.name)
            } else {
                node.name.to_string()
            };
            self.lines.push(format!("{}{}{}", node.prefix, marker, name));
            Ok(())
        }

        fn finish(&mut self, stats: &TraversalStats) -> io::Result<()> {
            self.finished = Some(*stats);
            Ok(())
        }
    }

    fn walk(dir: &TestDir, config: WalkerConfig) -> (Recorder, Result<TraversalStats>) {
        let mut recorder = Recorder::default();
        let result = StreamingWalker::new(config).walk_streaming(dir.path(), "root", &mut recorder);
        (recorder, result)
    }

    #[test]
    fn test_walk_emits_depth_first_with_prefixes() {
        let dir = TestDir::new();
        dir.add_file("readme.md", "");
        dir.add_file("src/main.cpp", "");
        dir.add_file("src/util/helpers.cpp", "");
        dir.add_file("Cargo.toml", "");

        let (recorder, result) = walk(&dir, WalkerConfig::default());
        let stats = result.unwrap();

        assert_eq!(
            recorder.lines,
            vec![
                "root root []",
                "|-->Cargo.toml",
                "|-->readme.md",
                "#-->[src]",
                "     |-->main.cpp",
                "     #-->[util]",
                "          #-->helpers.cpp",
            ]
        );
        assert_eq!(stats, TraversalStats { folders: 2, files: 4 });
        assert_eq!(recorder.finished, Some(stats));
    }

    #[test]
    fn test_walk_skips_ignored_files_without_counting() {
        let dir = TestDir::new();
        dir.add_file("a.cpp", "");
        dir.add_file("b.md", "");
        dir.add_file("c.CPP", "");

        let config = WalkerConfig {
            ignore: IgnoreSet::parse("cpp"),
            ..Default::default()
        };
        let (recorder, result) = walk(&dir, config);

        assert_eq!(recorder.lines, vec!["root root [.cpp]", "|-->b.md"]);
        assert_eq!(result.unwrap(), TraversalStats { folders: 0, files: 1 });
    }

    #[test]
    fn test_walk_counts_empty_directories() {
        let dir = TestDir::new();
        dir.add_dir("empty");
        let (recorder, result) = walk(&dir, WalkerConfig::default());
        assert_eq!(recorder.lines, vec!["root root []", "#-->[empty]"]);
        assert_eq!(result.unwrap(), TraversalStats { folders: 1, files: 0 });
    }

    #[test]
    fn test_walk_depth_guard() {
        let dir = TestDir::new();
        dir.add_file("a/b/c/deep.txt", "");

        let config = WalkerConfig {
            max_depth: 2,
            ..Default::default()
        };
        let (recorder, result) = walk(&dir, config);

        match result {
            Err(Error::DepthLimitExceeded { path, limit }) => {
                assert_eq!(limit, 2);
                assert!(path.ends_with("a/b/c"), "unexpected path {}", path.display());
            }
            other => panic!("expected depth limit error, got {:?}", other),
        }
        // Lines above the limit were already streamed.
        assert_eq!(recorder.lines, vec!["root root []", "#-->[a]", "     #-->[b]"]);
        assert_eq!(recorder.finished, None);
    }

    #[test]
    fn test_walk_depth_limit_is_inclusive() {
        let dir = TestDir::new();
        dir.add_file("a/b/leaf.txt", "");
        let config = WalkerConfig {
            max_depth: 2,
            ..Default::default()
        };
        let (_, result) = walk(&dir, config);
        assert_eq!(result.unwrap(), TraversalStats { folders: 2, files: 1 });
    }

    #[test]
    fn test_walk_missing_root_is_empty_in_silent_mode() {
        let dir = TestDir::new();
        let mut recorder = Recorder::default();
        let stats = StreamingWalker::new(WalkerConfig::default())
            .walk_streaming(&dir.path().join("gone"), "gone", &mut recorder)
            .unwrap();
        assert_eq!(recorder.lines, vec!["root gone []"]);
        assert_eq!(stats, TraversalStats::default());
    }

    #[test]
    fn test_walk_missing_root_is_marked_in_mark_mode() {
        let dir = TestDir::new();
        let mut recorder = Recorder::default();
        let config = WalkerConfig {
            listing_mode: ListingMode::Mark,
            ..Default::default()
        };
        StreamingWalker::new(config)
            .walk_streaming(&dir.path().join("gone"), "gone", &mut recorder)
            .unwrap();
        assert_eq!(recorder.lines, vec!["root gone [] unreadable"]);
    }
}
