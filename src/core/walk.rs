use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use crate::core::filter::EntryFilter;
use crate::core::render::Formatter;
use crate::error::TreeError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, Options, Tally};

/// Depth-first directory printer.
///
/// Every visible entry is written to the sink as soon as it is reached, so a
/// traversal failure leaves the lines printed so far in place.
pub struct TreeWalker<'a, F, W> {
    fs: &'a F,
    filter: EntryFilter,
    dirs_only: bool,
    out: Formatter<W>,
}

impl<'a, F: FileSystem, W: Write> TreeWalker<'a, F, W> {
    pub fn new(fs: &'a F, options: &Options, writer: W) -> Self {
        Self {
            fs,
            filter: EntryFilter::new(options),
            dirs_only: options.dirs_only,
            out: Formatter::new(writer, !options.no_indentation),
        }
    }

    /// Print the tree under `dirname` followed by the summary line.
    ///
    /// Nothing is written if `dirname` does not resolve to a directory.
    pub async fn display(&mut self, dirname: &Path) -> Result<Tally, TreeError> {
        let root = self.check_is_dir(dirname).await?;
        debug!("walking {} (resolved to {})", dirname.display(), root.display());

        self.out.line(&dirname.display().to_string())?;
        let tally = self.dive(&root, 0).await?;
        self.out.summary(tally, self.dirs_only)?;

        debug!("walked {} directories, {} files", tally.dirs, tally.files);
        Ok(tally)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn check_is_dir(&self, dirname: &Path) -> Result<PathBuf, TreeError> {
        let not_found = |source: io::Error| TreeError::PathNotFound {
            path: dirname.to_path_buf(),
            source,
        };

        let resolved = self.fs.canonicalize(dirname).await.map_err(not_found)?;
        if self.fs.is_dir(&resolved).await.map_err(not_found)? {
            Ok(resolved)
        } else {
            Err(TreeError::NotADirectory(dirname.to_path_buf()))
        }
    }

    async fn dive(&mut self, dir: &Path, depth: usize) -> Result<Tally, TreeError> {
        let mut tally = Tally::default();

        for entry in self.entries_in(dir).await? {
            trace!("visiting {}", entry.path.display());
            match &entry.kind {
                EntryKind::Directory => {
                    self.out.entry(&entry.name, depth)?;
                    tally += Box::pin(self.dive(&entry.path, depth + 1)).await?;
                    tally.dirs += 1;
                }
                EntryKind::Symlink { target } => {
                    let text = format!("{} -> {}", entry.name, target.display());
                    self.out.entry(&text, depth)?;
                    tally.files += 1;
                }
                EntryKind::File => {
                    self.out.entry(&entry.name, depth)?;
                    tally.files += 1;
                }
                EntryKind::Other => {
                    warn!("{}: not a directory, file or symlink", entry.path.display());
                    self.out
                        .line(&format!("[error]: {}:{}", entry.name, entry.path.display()))?;
                }
            }
        }

        Ok(tally)
    }

    /// Visible children of `dir` in byte-wise name order.
    async fn entries_in(&self, dir: &Path) -> Result<Vec<FsEntry>, TreeError> {
        debug!("listing {}", dir.display());
        let entries = self
            .fs
            .read_dir(dir)
            .await
            .map_err(|source| TreeError::TraversalFailure {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut visible: Vec<FsEntry> = entries
            .into_iter()
            .filter(|entry| self.filter.accepts(entry))
            .collect();
        visible.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(visible)
    }
}
