use async_trait::async_trait;
use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                let kind = classify(entry.file_type(), || std::fs::read_link(&path));

                entries.push(FsEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path,
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        tokio::fs::canonicalize(path).await
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(tokio::fs::metadata(path).await?.is_dir())
    }
}

/// Map an entry's own file type to its kind. Entries whose type or link
/// target cannot be read are `Other`.
fn classify(
    file_type: io::Result<FileType>,
    read_link: impl FnOnce() -> io::Result<PathBuf>,
) -> EntryKind {
    match file_type {
        Ok(file_type) if file_type.is_symlink() => match read_link() {
            Ok(target) => EntryKind::Symlink { target },
            Err(_) => EntryKind::Other,
        },
        Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
        Ok(file_type) if file_type.is_file() => EntryKind::File,
        // devices, sockets, fifos and entries that vanished mid-listing
        _ => EntryKind::Other,
    }
}
