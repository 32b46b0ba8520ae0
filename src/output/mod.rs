//! Tree formatting and display
//!
//! This module provides sinks for the streamed tree:
//! - Console output with colors
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `render` - Terminal-independent line model (text segments with style tags)
//! - `streaming` - Streaming formatter for console output
//! - `json` - JSON document builder

mod config;
mod json;
mod render;
mod streaming;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{JsonDocument, JsonFormatter, TreeNode, print_json, write_json};
pub use render::{
    PROMPT, Segment, StyleTag, plain_text, render_ignore_notice, render_node, render_prompt,
    render_root, render_summary,
};
pub use streaming::{StreamingFormatter, color_spec};
