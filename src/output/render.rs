//! Terminal-independent line rendering
//!
//! Every printable line is built as a list of [`Segment`]s. Sinks decide how
//! each [`StyleTag`] looks; nothing here knows about colors.

use std::io;
use std::path::MAIN_SEPARATOR;

use crate::ignore::IgnoreSet;
use crate::string_utils::split_extension;
use crate::tree::{NodeInfo, TraversalStats, branch_marker};

/// Text shown before reading the input line.
pub const PROMPT: &str = "Enter Path : ";

/// Semantic emphasis of a piece of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Default,
    Folder,
    Extension,
    TreeMarker,
    Prompt,
    Notice,
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: StyleTag,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Concatenate segment text, dropping styles.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

pub fn render_prompt() -> Vec<Segment> {
    vec![Segment::new(PROMPT, StyleTag::Prompt)]
}

/// Root line: the directory's name followed by a path separator.
pub fn render_root(name: &str, unreadable: Option<&io::Error>) -> Vec<Segment> {
    let mut line = vec![Segment::new(
        format!("{}{}", name, MAIN_SEPARATOR),
        StyleTag::Folder,
    )];
    if let Some(err) = unreadable {
        line.push(unreadable_note(err));
    }
    line
}

/// `(Ignoring extensions: .a, .b)`, or nothing for an empty set.
pub fn render_ignore_notice(ignore: &IgnoreSet) -> Option<Vec<Segment>> {
    if ignore.is_empty() {
        return None;
    }
    Some(vec![
        Segment::new("(Ignoring extensions: ", StyleTag::TreeMarker),
        Segment::new(ignore.to_string(), StyleTag::Extension),
        Segment::new(")", StyleTag::TreeMarker),
    ])
}

/// A tree line: prefix and branch marker, then the folder or file name.
///
/// Folders are bracketed; files have their final extension split off so it
/// can be emphasized separately.
pub fn render_node(node: &NodeInfo<'_>) -> Vec<Segment> {
    let mut line = vec![Segment::new(
        format!("{}{}", node.prefix, branch_marker(node.is_last)),
        StyleTag::TreeMarker,
    )];

    if node.is_dir() {
        line.push(Segment::new(format!("[{}]", node.name), StyleTag::Folder));
        if let Some(err) = node.unreadable {
            line.push(unreadable_note(err));
        }
        return line;
    }

    match split_extension(node.name) {
        (stem, Some(ext)) => {
            if !stem.is_empty() {
                line.push(Segment::new(stem, StyleTag::Default));
            }
            line.push(Segment::new(ext, StyleTag::Extension));
        }
        (name, None) => line.push(Segment::new(name, StyleTag::Default)),
    }
    line
}

/// The two closing total lines.
pub fn render_summary(stats: &TraversalStats) -> [Vec<Segment>; 2] {
    [
        vec![Segment::new(
            format!("Folders: {}", stats.folders),
            StyleTag::TreeMarker,
        )],
        vec![Segment::new(
            format!("Files: {}", stats.files),
            StyleTag::TreeMarker,
        )],
    ]
}

fn unreadable_note(err: &io::Error) -> Segment {
    Segment::new(format!(" (unreadable: {})", err), StyleTag::Notice)
}
