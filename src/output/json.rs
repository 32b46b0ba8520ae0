//! JSON output formatting
//!
//! `JsonFormatter` is a [`StreamingOutput`] sink that rebuilds the nested tree
//! from the walker's depth-first stream, so JSON and console output share one
//! traversal.

use std::io::{self, Write};

use serde::Serialize;

use crate::ignore::IgnoreSet;
use crate::string_utils::split_extension;
use crate::tree::{NodeInfo, StreamingOutput, TraversalStats};

/// A node of the serialized tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        extension: Option<String>,
    },
    Dir {
        name: String,
        children: Vec<TreeNode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        unreadable: Option<String>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}

/// The complete JSON document for one scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JsonDocument {
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreadable: Option<String>,
    pub ignored: IgnoreSet,
    pub tree: Vec<TreeNode>,
    pub folders: usize,
    pub files: usize,
}

/// Directory whose children are still arriving.
#[derive(Debug)]
struct OpenDir {
    name: String,
    unreadable: Option<String>,
    children: Vec<TreeNode>,
}

impl From<OpenDir> for TreeNode {
    fn from(dir: OpenDir) -> Self {
        TreeNode::Dir {
            name: dir.name,
            children: dir.children,
            unreadable: dir.unreadable,
        }
    }
}

/// Collects streamed nodes into a [`JsonDocument`].
#[derive(Debug, Default)]
pub struct JsonFormatter {
    document: JsonDocument,
    /// `open[d - 1]` is the open directory at depth `d`.
    open: Vec<OpenDir>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish any open directories and return the document.
    pub fn into_document(mut self) -> JsonDocument {
        self.close_to(0);
        self.document
    }

    /// Close open directories until at most `depth` remain.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(dir) = self.open.pop() {
                self.push_node(dir.into());
            }
        }
    }

    fn push_node(&mut self, node: TreeNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.document.tree.push(node),
        }
    }
}

impl StreamingOutput for JsonFormatter {
    fn output_root(
        &mut self,
        name: &str,
        ignore: &IgnoreSet,
        unreadable: Option<&io::Error>,
    ) -> io::Result<()> {
        self.document.root = name.to_string();
        self.document.ignored = ignore.clone();
        self.document.unreadable = unreadable.map(ToString::to_string);
        Ok(())
    }

    fn output_node(&mut self, node: &NodeInfo<'_>) -> io::Result<()> {
        // Siblings and their subtrees at this depth or deeper are complete.
        self.close_to(node.depth.saturating_sub(1));

        if node.is_dir() {
            self.open.push(OpenDir {
                name: node.name.to_string(),
                unreadable: node.unreadable.map(ToString::to_string),
                children: Vec::new(),
            });
        } else {
            let extension = split_extension(node.name).1.map(str::to_string);
            self.push_node(TreeNode::File {
                name: node.name.to_string(),
                extension,
            });
        }
        Ok(())
    }

    fn finish(&mut self, stats: &TraversalStats) -> io::Result<()> {
        self.close_to(0);
        self.document.folders = stats.folders;
        self.document.files = stats.files;
        Ok(())
    }
}

/// Write the document as pretty-printed JSON.
pub fn write_json<W: Write>(document: &JsonDocument, mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, document).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print the document as pretty-printed JSON to stdout.
pub fn print_json(document: &JsonDocument) -> io::Result<()> {
    write_json(document, io::stdout().lock())
}
