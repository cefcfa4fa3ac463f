mod entry;
mod options;
mod tally;

pub use entry::{EntryKind, FsEntry};
pub use options::Options;
pub use tally::Tally;
