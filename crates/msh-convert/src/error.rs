use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the parser and exporter collaborators
#[derive(Error, Debug)]
pub enum BackendError {
    /// The source file could not be read or is not a valid MSH file
    #[error("Failed to read MSH file '{}'", path.display())]
    ParseFailed { path: PathBuf },

    /// The exporter refused to open a session for the destination
    #[error("Failed to open FBX destination '{}'", path.display())]
    OpenFailed { path: PathBuf },

    /// The exporter rejected the parsed content
    #[error("Exporter rejected the model data: {0}")]
    MergeRejected(String),

    /// Saving the open session failed
    #[error("Failed to save FBX file '{}'", path.display())]
    SaveFailed { path: PathBuf },

    /// The FBX file would replace the input it is converted from
    #[error("Refusing to overwrite input file '{}'", path.display())]
    OverwritesInput { path: PathBuf },

    /// Another export session is still open
    #[error("An export session is already open")]
    SessionBusy,

    /// A path or name could not be handed to the collaborator
    #[error("Invalid path or name: {0}")]
    InvalidArgument(String),
}

/// Errors in the shape of the user supplied destination
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DestinationError {
    /// The destination names a directory that does not exist
    #[error("Given destination directory does not exist!")]
    MissingDirectory(PathBuf),

    /// The destination names a file without the `.fbx` extension
    #[error("WARNING: Your desired FBX File Name does not have the required .fbx extension!")]
    NotFbx(PathBuf),
}

/// Result type using BackendError
pub type Result<T> = std::result::Result<T, BackendError>;
