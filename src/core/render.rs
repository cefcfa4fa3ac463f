use std::io::{self, Write};

use crate::models::Tally;

pub const GLYPH: &str = "|-- ";

/// Width of one indentation level.
const INDENT_WIDTH: usize = 4;

/// Text written between the line start and the glyph for an entry at `depth`.
///
/// The indentation is `INDENT_WIDTH * depth` spaces with its first character
/// replaced by a pipe, so depth 0 yields an empty prefix.
pub fn branch_prefix(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = String::with_capacity(INDENT_WIDTH * depth);
    prefix.push('|');
    prefix.extend(std::iter::repeat_n(' ', INDENT_WIDTH * depth - 1));
    prefix
}

/// The closing "N directories, M files" line, without the leading blank line.
pub fn summary_line(tally: Tally, dirs_only: bool) -> String {
    let mut line = format!("{} {}", tally.dirs, plural(tally.dirs, "directory", "directories"));
    if !dirs_only {
        line.push_str(&format!(", {} {}", tally.files, plural(tally.files, "file", "files")));
    }
    line
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Line-oriented writer for tree output.
pub struct Formatter<W> {
    writer: W,
    show_indentation: bool,
}

impl<W: Write> Formatter<W> {
    pub fn new(writer: W, show_indentation: bool) -> Self {
        Self {
            writer,
            show_indentation,
        }
    }

    /// Write one entry line, prefixed with indentation and glyph when enabled.
    pub fn entry(&mut self, text: &str, depth: usize) -> io::Result<()> {
        if self.show_indentation {
            self.writer.write_all(branch_prefix(depth).as_bytes())?;
            self.writer.write_all(GLYPH.as_bytes())?;
        }
        self.line(text)
    }

    /// Write `text` as-is followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    pub fn summary(&mut self, tally: Tally, dirs_only: bool) -> io::Result<()> {
        self.writer.write_all(b"\n")?;
        self.line(&summary_line(tally, dirs_only))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
