use std::ops::AddAssign;

/// Directory and file counts for one subtree. Symlinks count as files.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub dirs: usize,
    pub files: usize,
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.dirs += other.dirs;
        self.files += other.files;
    }
}
