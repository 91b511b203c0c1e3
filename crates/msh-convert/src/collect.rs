//! Expansion of user supplied paths into concrete MSH files

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

/// Extension of Battlefront II mesh files
pub const MSH_EXTENSION: &str = "msh";

/// Expand files and directories into a list of files.
///
/// Files named directly are kept as they are, without looking at their
/// extension. Directories contribute every file whose extension matches
/// `extension` (ASCII case-insensitive); with `recursive` their
/// sub-directories are crawled depth-first as well. Paths that do not exist
/// are skipped.
///
/// Directory children are visited in file name order, so the result is
/// stable for an unchanged file system. Symbolic links to directories are
/// crawled like directories; link loops are skipped.
pub fn collect_files<P: AsRef<Path>>(paths: &[P], extension: &str, recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            crawl_directory(path, extension, recursive, &mut files);
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            debug!("Skipping '{}': no such file or directory", path.display());
        }
    }

    files
}

fn crawl_directory(dir: &Path, extension: &str, recursive: bool, files: &mut Vec<PathBuf>) {
    let mut walker = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in '{}': {e}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && has_extension(path, extension) {
            files.push(entry.into_path());
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
