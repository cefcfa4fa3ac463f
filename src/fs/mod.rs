mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the immediate children of `dir`, unfiltered and unsorted.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Resolve every symbolic link in `path`.
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    async fn is_dir(&self, path: &Path) -> io::Result<bool>;
}
