//! A small `tree` clone: prints a directory hierarchy with `|-- ` branch
//! glyphs and a closing "N directories, M files" summary.

pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use cli::{Cli, Invocation, parse_args};
pub use error::TreeError;
pub use models::{Options, Tally};

use std::io::Write;
use std::path::Path;

use crate::core::TreeWalker;
use crate::fs::FileSystem;

/// Print the tree rooted at `directory` to `writer`.
pub async fn display<F: FileSystem, W: Write>(
    fs: &F,
    options: &Options,
    directory: &Path,
    writer: W,
) -> Result<Tally, TreeError> {
    TreeWalker::new(fs, options, writer).display(directory).await
}
