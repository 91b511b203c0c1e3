//! End-to-end pipeline tests against the file system
//!
//! The collaborators here read real files and write real outputs, standing
//! in for the native parser and exporter.

use std::fs;
use std::path::{Path, PathBuf};

use msh_convert::{
    AssetParser, BackendError, Converter, ExportSession, InputSet, Job, MSH_EXTENSION,
    MergeOptions, ModelPurpose, OutputMode, Result, SceneExporter, collect_files,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Accepts files starting with the MSH header magic
struct HeaderParser;

impl AssetParser for HeaderParser {
    type Asset = String;

    fn read(&mut self, path: &Path) -> Result<String> {
        let data = fs::read(path).map_err(|_| BackendError::ParseFailed {
            path: path.to_path_buf(),
        })?;
        if !data.starts_with(b"HEDR") {
            return Err(BackendError::ParseFailed {
                path: path.to_path_buf(),
            });
        }
        Ok(path.file_name().unwrap().to_string_lossy().into_owned())
    }
}

/// Writes one line per merged asset on save
struct TextExporter;

struct TextSession {
    destination: PathBuf,
    lines: Vec<String>,
}

impl SceneExporter for TextExporter {
    type Asset = String;
    type Session = TextSession;

    fn open(&mut self, destination: &Path) -> Result<TextSession> {
        Ok(TextSession {
            destination: destination.to_path_buf(),
            lines: Vec::new(),
        })
    }
}

impl ExportSession for TextSession {
    type Asset = String;

    fn merge(&mut self, asset: &String, options: &MergeOptions) -> Result<()> {
        self.lines.push(format!(
            "{asset} {:?} {:?}",
            options.chunk_filter, options.animation_name
        ));
        Ok(())
    }

    fn save(self) -> Result<()> {
        fs::write(&self.destination, self.lines.join("\n")).map_err(|_| {
            BackendError::SaveFailed {
                path: self.destination.clone(),
            }
        })
    }
}

fn write_msh(root: &Path, name: &str, valid: bool) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, if valid { &b"HEDR...."[..] } else { &b"JUNK"[..] }).unwrap();
    path
}

#[test]
fn test_existing_directory_destination_writes_siblings() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_msh(root, "side/rep_inf.msh", true);
    write_msh(root, "side/rep_walk.msh", true);
    write_msh(root, "side/corrupt.msh", false);
    let out_dir = root.join("out");
    fs::create_dir(&out_dir).unwrap();

    let output = OutputMode::resolve(Some(&out_dir)).unwrap();
    assert_eq!(output, OutputMode::PerFile);

    let job = Job {
        inputs: InputSet {
            full: collect_files(&[root.join("side")], MSH_EXTENSION, false),
            ..InputSet::default()
        },
        output,
        ignore: ModelPurpose::empty(),
        override_animation_name: false,
    };

    let summary = Converter::new(HeaderParser, TextExporter).run(&job, &mut ());

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].path, root.join("side/corrupt.msh"));
    assert!(root.join("side/rep_inf.fbx").exists());
    assert!(root.join("side/rep_walk.fbx").exists());
    assert!(!root.join("side/corrupt.fbx").exists());
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn test_merged_destination_collects_every_phase() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let model = write_msh(root, "rep_inf.msh", true);
    let full = write_msh(root, "rep_hero.msh", true);
    let anim = write_msh(root, "anims/rep_run.msh", true);
    let destination = root.join("merged.fbx");

    let job = Job {
        inputs: InputSet {
            full: vec![full],
            animations: collect_files(&[root.join("anims")], MSH_EXTENSION, false),
            models: vec![model],
        },
        output: OutputMode::resolve(Some(&destination)).unwrap(),
        ignore: ModelPurpose::SKELETON,
        override_animation_name: true,
    };

    let summary = Converter::new(HeaderParser, TextExporter).run(&job, &mut ());

    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.written, vec![destination.clone()]);
    assert_eq!(job.inputs.animations, vec![anim]);
    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        [
            "rep_inf.msh ModelsOnly None",
            "rep_hero.msh None Some(\"rep_hero\")",
            "rep_run.msh AnimationsOnly Some(\"rep_run\")",
        ]
        .join("\n")
    );
}

#[test]
fn test_merged_destination_is_not_written_when_everything_fails() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let corrupt = write_msh(root, "corrupt.msh", false);
    let destination = root.join("merged.fbx");

    let job = Job {
        inputs: InputSet {
            full: vec![corrupt, root.join("missing.msh")],
            ..InputSet::default()
        },
        output: OutputMode::Merged(destination.clone()),
        ignore: ModelPurpose::empty(),
        override_animation_name: false,
    };

    let summary = Converter::new(HeaderParser, TextExporter).run(&job, &mut ());

    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.failed.len(), 2);
    assert!(!destination.exists());
}
