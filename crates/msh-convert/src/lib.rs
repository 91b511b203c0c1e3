//! Conversion pipeline for Star Wars Battlefront II MSH files
//!
//! Parsing MSH files and writing FBX scenes are left to the collaborators
//! described in [`backend`]. This crate decides which files get converted,
//! in which order, into which output, and with which filters.

pub mod backend;
pub mod collect;
pub mod error;
pub mod purpose;
pub mod session;

pub use backend::{AssetParser, ExportSession, MergeOptions, SceneExporter};
pub use collect::{MSH_EXTENSION, collect_files};
pub use error::{BackendError, DestinationError, Result};
pub use purpose::{ChunkFilter, ModelPurpose, ignore_mask};
pub use session::{
    Converter, FBX_EXTENSION, FailedFile, InputSet, Job, OutputMode, Progress, Summary,
};
