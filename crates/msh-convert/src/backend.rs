//! Seams to the external MSH parser and FBX exporter
//!
//! The pipeline never looks at MSH bytes or FBX nodes itself. It reads
//! assets through an [`AssetParser`] and merges them into sessions opened by
//! a [`SceneExporter`]. Every call reports failure through [`Result`] so the
//! pipeline can decide to skip a file deliberately.

use std::path::Path;

use crate::error::Result;
use crate::purpose::{ChunkFilter, ModelPurpose};

/// Settings handed to the exporter with every merged asset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Model purposes the exporter must skip
    pub ignore: ModelPurpose,
    /// Chunks of the asset the exporter must honor
    pub chunk_filter: ChunkFilter,
    /// Replacement for the animation name stored in the asset
    pub animation_name: Option<String>,
}

/// Reads source assets from disk
pub trait AssetParser {
    /// Parsed representation of one source file
    type Asset;

    /// Parse the file at `path`
    fn read(&mut self, path: &Path) -> Result<Self::Asset>;
}

/// Opens export sessions bound to a destination file
pub trait SceneExporter {
    /// Asset type the sessions accept
    type Asset;
    /// Open session type
    type Session: ExportSession<Asset = Self::Asset>;

    /// Open a session writing to `destination`
    fn open(&mut self, destination: &Path) -> Result<Self::Session>;
}

/// One open output scene.
///
/// Dropping a session without calling [`ExportSession::save`] closes it
/// without writing anything.
pub trait ExportSession {
    /// Asset type this session accepts
    type Asset;

    /// Merge a parsed asset into the scene
    fn merge(&mut self, asset: &Self::Asset, options: &MergeOptions) -> Result<()>;

    /// Write the scene to its destination and close the session
    fn save(self) -> Result<()>;

    /// Close the session without writing
    fn close(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}
