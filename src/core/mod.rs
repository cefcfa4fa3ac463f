pub mod filter;
pub mod render;
pub mod walk;

pub use filter::EntryFilter;
pub use render::Formatter;
pub use walk::TreeWalker;
