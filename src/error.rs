use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("command line option {0} not recognized")]
    InvalidArgument(String),

    #[error("path {} does not exist", .path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory {}: {source}", .path.display())]
    TraversalFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
