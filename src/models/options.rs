/// Switches that change what the walker shows and how it is rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// Show entries whose names begin with '.' (`-a`)
    pub all_files: bool,
    /// Show only directories and drop the file count from the summary (`-d`)
    pub dirs_only: bool,
    /// Print bare names without branch glyphs (`-i`)
    pub no_indentation: bool,
}
