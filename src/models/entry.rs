use std::path::PathBuf;

/// Kind of a directory entry, taken from the entry itself (links are not followed).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    /// A symbolic link and its immediate target, read once when listed.
    Symlink { target: PathBuf },
    Other,
}

impl EntryKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}
