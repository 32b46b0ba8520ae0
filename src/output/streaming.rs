//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines as they
//! arrive from `StreamingWalker`, coloring each segment by its style tag.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ignore::IgnoreSet;
use crate::tree::{NodeInfo, StreamingOutput, TraversalStats};

use super::config::OutputConfig;
use super::render::{
    Segment, StyleTag, render_ignore_notice, render_node, render_prompt, render_root,
    render_summary,
};

/// Console color for a style tag; `None` means the terminal default.
pub fn color_spec(style: StyleTag) -> Option<ColorSpec> {
    let color = match style {
        StyleTag::Default => return None,
        StyleTag::Folder => Color::Blue,
        StyleTag::Extension => Color::Red,
        StyleTag::TreeMarker => Color::Magenta,
        StyleTag::Prompt => Color::Red,
        StyleTag::Notice => Color::Yellow,
    };
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    Some(spec)
}

/// Streaming output formatter - writes each line as soon as it is produced.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the input prompt without a trailing newline and flush it.
    pub fn prompt(&mut self) -> io::Result<()> {
        self.write_segments(&render_prompt())?;
        self.out.flush()
    }

    /// Write a plain message line.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn write_segments(&mut self, segments: &[Segment]) -> io::Result<()> {
        for segment in segments {
            match color_spec(segment.style).filter(|_| self.config.use_color) {
                Some(spec) => {
                    self.out.set_color(&spec)?;
                    write!(self.out, "{}", segment.text)?;
                    self.out.reset()?;
                }
                None => write!(self.out, "{}", segment.text)?,
            }
        }
        Ok(())
    }

    fn write_line(&mut self, segments: &[Segment]) -> io::Result<()> {
        self.write_segments(segments)?;
        writeln!(self.out)
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_root(
        &mut self,
        name: &str,
        ignore: &IgnoreSet,
        unreadable: Option<&io::Error>,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        self.write_line(&render_root(name, unreadable))?;
        if let Some(notice) = render_ignore_notice(ignore) {
            self.write_line(&notice)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn output_node(&mut self, node: &NodeInfo<'_>) -> io::Result<()> {
        self.write_line(&render_node(node))
    }

    fn finish(&mut self, stats: &TraversalStats) -> io::Result<()> {
        writeln!(self.out)?;
        for line in render_summary(stats) {
            self.write_line(&line)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EntryKind;
    use termcolor::Buffer;

    fn plain_formatter() -> StreamingFormatter<Buffer> {
        StreamingFormatter::with_writer(OutputConfig { use_color: false }, Buffer::no_color())
    }

    fn contents(formatter: StreamingFormatter<Buffer>) -> String {
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_full_sequence_plain() {
        let mut f = plain_formatter();
        f.output_root("proj", &IgnoreSet::new(), None).unwrap();
        f.output_node(&NodeInfo {
            name: "readme.md",
            kind: EntryKind::File,
            is_last: true,
            prefix: "",
            depth: 1,
            unreadable: None,
        })
        .unwrap();
        f.finish(&TraversalStats { folders: 0, files: 1 }).unwrap();

        let expected = format!(
            "\nproj{}\n#-->readme.md\n\nFolders: 0\nFiles: 1\n",
            std::path::MAIN_SEPARATOR
        );
        assert_eq!(contents(f), expected);
    }

    #[test]
    fn test_ignore_notice_followed_by_blank_line() {
        let mut f = plain_formatter();
        f.output_root("proj", &IgnoreSet::parse("cpp"), None).unwrap();
        let out = contents(f);
        assert!(
            out.ends_with("(Ignoring extensions: .cpp)\n\n"),
            "unexpected output: {:?}",
            out
        );
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut f = plain_formatter();
        f.prompt().unwrap();
        assert_eq!(contents(f), "Enter Path : ");
    }

    #[test]
    fn test_color_emits_ansi_only_when_enabled() {
        let node = NodeInfo {
            name: "main.cpp",
            kind: EntryKind::File,
            is_last: false,
            prefix: "",
            depth: 1,
            unreadable: None,
        };

        let mut colored =
            StreamingFormatter::with_writer(OutputConfig { use_color: true }, Buffer::ansi());
        colored.output_node(&node).unwrap();
        let colored = String::from_utf8(colored.into_inner().into_inner()).unwrap();
        assert!(colored.contains("\x1b["), "expected ANSI codes: {:?}", colored);
        assert!(colored.contains("main"));

        let mut plain =
            StreamingFormatter::with_writer(OutputConfig { use_color: false }, Buffer::ansi());
        plain.output_node(&node).unwrap();
        let plain = String::from_utf8(plain.into_inner().into_inner()).unwrap();
        assert_eq!(plain, "|-->main.cpp\n");
    }

    #[test]
    fn test_color_spec_mapping() {
        assert!(color_spec(StyleTag::Default).is_none());
        assert_eq!(color_spec(StyleTag::Folder).unwrap().fg(), Some(&Color::Blue));
        assert_eq!(color_spec(StyleTag::Extension).unwrap().fg(), Some(&Color::Red));
        assert_eq!(
            color_spec(StyleTag::TreeMarker).unwrap().fg(),
            Some(&Color::Magenta)
        );
    }
}
