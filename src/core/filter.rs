use crate::models::{FsEntry, Options};

/// Decides which directory entries are shown, from name and kind only.
#[derive(Clone, Copy, Debug)]
pub struct EntryFilter {
    dirs_only: bool,
    show_hidden: bool,
}

impl EntryFilter {
    pub fn new(options: &Options) -> Self {
        Self {
            dirs_only: options.dirs_only,
            show_hidden: options.all_files,
        }
    }

    pub fn accepts(&self, entry: &FsEntry) -> bool {
        if self.dirs_only && !entry.kind.is_dir() {
            return false;
        }
        self.show_hidden || !entry.name.starts_with('.')
    }
}
