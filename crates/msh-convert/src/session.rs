//! The merge/split conversion pipeline
//!
//! A run converts three lists of MSH files either into one FBX file per
//! input or into a single merged FBX file. Files are processed in three
//! strict phases: model-only files first, complete files second and
//! animation-only files last, so the bones animations refer to are already
//! part of the open scene when the animations arrive.

use std::path::{Path, PathBuf, is_separator};

use log::{debug, error, info, warn};

use crate::backend::{AssetParser, ExportSession, MergeOptions, SceneExporter};
use crate::error::{BackendError, DestinationError, Result};
use crate::purpose::{ChunkFilter, ModelPurpose};

/// Extension of the interchange files this tool writes
pub const FBX_EXTENSION: &str = "fbx";

/// Where converted scenes are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// One FBX file beside every input file
    PerFile,
    /// Every input merged into one FBX file
    Merged(PathBuf),
}

impl OutputMode {
    /// Pick the output mode for a user supplied destination.
    ///
    /// No destination, or a directory that exists, selects per-file output.
    /// Anything that looks like a directory but is missing is rejected, as
    /// is a file name without the `.fbx` extension. Every other path names
    /// the merged output file, which does not have to exist yet.
    pub fn resolve(destination: Option<&Path>) -> std::result::Result<Self, DestinationError> {
        let Some(destination) = destination.filter(|d| !d.as_os_str().is_empty()) else {
            return Ok(Self::PerFile);
        };

        if destination.is_dir() {
            return Ok(Self::PerFile);
        }

        if describes_directory(destination) {
            return Err(DestinationError::MissingDirectory(destination.to_path_buf()));
        }

        let is_fbx = destination
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FBX_EXTENSION));
        if !is_fbx {
            return Err(DestinationError::NotFbx(destination.to_path_buf()));
        }

        Ok(Self::Merged(destination.to_path_buf()))
    }

    /// Output file for a single input in per-file mode
    pub fn sibling_output(input: &Path) -> PathBuf {
        input.with_extension(FBX_EXTENSION)
    }
}

// "", ".", ".." and anything ending in a separator
fn describes_directory(path: &Path) -> bool {
    let raw = path.as_os_str().to_string_lossy();
    let last = raw.rsplit(is_separator).next().unwrap_or_default();
    matches!(last, "" | "." | "..")
}

/// The three input lists of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSet {
    /// Files imported completely
    pub full: Vec<PathBuf>,
    /// Files contributing animation data only
    pub animations: Vec<PathBuf>,
    /// Files contributing model data only
    pub models: Vec<PathBuf>,
}

impl InputSet {
    /// Number of files across all three lists
    pub fn total(&self) -> usize {
        self.full.len() + self.animations.len() + self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The lists in processing order, each with the chunk filter of its phase
    pub fn phases(&self) -> [(&[PathBuf], ChunkFilter); 3] {
        [
            (self.models.as_slice(), ChunkFilter::ModelsOnly),
            (self.full.as_slice(), ChunkFilter::None),
            (self.animations.as_slice(), ChunkFilter::AnimationsOnly),
        ]
    }
}

/// Everything a run needs to know, fixed for its whole duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub inputs: InputSet,
    pub output: OutputMode,
    /// Model purposes skipped in every file
    pub ignore: ModelPurpose,
    /// Name animations after their file instead of the name stored inside
    pub override_animation_name: bool,
}

impl Job {
    fn merge_options(&self, path: &Path, chunk_filter: ChunkFilter) -> MergeOptions {
        let animation_name = if self.override_animation_name && chunk_filter.carries_animations() {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        } else {
            None
        };

        MergeOptions {
            ignore: self.ignore,
            chunk_filter,
            animation_name,
        }
    }
}

/// Receives the progress of a run
pub trait Progress {
    /// `done` of `total` files have been converted so far
    fn update(&mut self, done: usize, total: usize);

    /// Called once when the run is over
    fn finish(&mut self);
}

impl Progress for () {
    fn update(&mut self, _done: usize, _total: usize) {}

    fn finish(&mut self) {}
}

/// A file that was skipped
#[derive(Debug)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: BackendError,
}

/// Outcome of a run
#[derive(Debug, Default)]
pub struct Summary {
    /// Files across all three lists
    pub total: usize,
    /// Files that were parsed and merged
    pub succeeded: usize,
    /// Files that were skipped, in processing order
    pub failed: Vec<FailedFile>,
    /// FBX files that were written
    pub written: Vec<PathBuf>,
}

/// Drives the parser and exporter through a run
#[derive(Debug)]
pub struct Converter<P, E> {
    parser: P,
    exporter: E,
}

impl<P, E> Converter<P, E>
where
    P: AssetParser,
    E: SceneExporter<Asset = P::Asset>,
{
    pub fn new(parser: P, exporter: E) -> Self {
        Self { parser, exporter }
    }

    /// Convert every file of `job`.
    ///
    /// A file that fails to parse or merge is logged and skipped; it never
    /// ends the run. `progress` is finished on every path out of this
    /// function.
    pub fn run(&mut self, job: &Job, progress: &mut impl Progress) -> Summary {
        let mut summary = Summary {
            total: job.inputs.total(),
            ..Summary::default()
        };
        info!("Converting {} MSH files", summary.total);

        match &job.output {
            OutputMode::Merged(destination) => {
                self.run_merged(job, destination, &mut summary, progress);
            }
            OutputMode::PerFile => self.run_per_file(job, &mut summary, progress),
        }

        progress.finish();
        info!(
            "Converted {} of {} MSH files ({} skipped)",
            summary.succeeded,
            summary.total,
            summary.failed.len()
        );
        summary
    }

    fn run_merged(
        &mut self,
        job: &Job,
        destination: &Path,
        summary: &mut Summary,
        progress: &mut impl Progress,
    ) {
        let mut session = match self.exporter.open(destination) {
            Ok(session) => session,
            Err(e) => {
                error!("{e}");
                return;
            }
        };

        for (files, chunk_filter) in job.inputs.phases() {
            for path in files {
                let options = job.merge_options(path, chunk_filter);
                let result = merge_file(&mut self.parser, &mut session, path, &options);
                record(summary, path, result, progress);
            }
        }

        if summary.succeeded == 0 {
            debug!("Nothing was converted, discarding '{}'", destination.display());
            session.close();
            return;
        }

        match session.save() {
            Ok(()) => summary.written.push(destination.to_path_buf()),
            Err(e) => error!("{e}"),
        }
    }

    fn run_per_file(&mut self, job: &Job, summary: &mut Summary, progress: &mut impl Progress) {
        for (files, chunk_filter) in job.inputs.phases() {
            for path in files {
                let options = job.merge_options(path, chunk_filter);
                let destination = OutputMode::sibling_output(path);
                let result = self.convert_file(path, &destination, &options);
                if result.is_ok() {
                    summary.written.push(destination);
                }
                record(summary, path, result, progress);
            }
        }
    }

    fn convert_file(&mut self, path: &Path, destination: &Path, options: &MergeOptions) -> Result<()> {
        let is_fbx = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FBX_EXTENSION));
        if is_fbx || destination == path {
            return Err(BackendError::OverwritesInput {
                path: path.to_path_buf(),
            });
        }

        let mut session = self.exporter.open(destination)?;
        match merge_file(&mut self.parser, &mut session, path, options) {
            Ok(()) => session.save(),
            Err(e) => {
                session.close();
                Err(e)
            }
        }
    }
}

fn merge_file<P, S>(parser: &mut P, session: &mut S, path: &Path, options: &MergeOptions) -> Result<()>
where
    P: AssetParser,
    S: ExportSession<Asset = P::Asset>,
{
    debug!("Converting '{}' ({:?})", path.display(), options.chunk_filter);
    let asset = parser.read(path)?;
    session.merge(&asset, options)
}

fn record(summary: &mut Summary, path: &Path, result: Result<()>, progress: &mut impl Progress) {
    match result {
        Ok(()) => {
            summary.succeeded += 1;
            progress.update(summary.succeeded, summary.total);
        }
        Err(error) => {
            warn!("Skipping '{}': {error}", path.display());
            summary.failed.push(FailedFile {
                path: path.to_path_buf(),
                error,
            });
        }
    }
}
