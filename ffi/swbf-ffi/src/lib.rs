//! Safe bindings over the native MSH reader and FBX converter
//!
//! [`MshParser`] and [`FbxExporter`] implement the collaborator traits of
//! `msh-convert`. Native handles are owned by Rust values and released in
//! `Drop`, so early returns never leak an MSH handle or leave the converter
//! scene open.

#![allow(unsafe_code)]

pub mod sys;

use std::ffi::{CStr, CString};
use std::path::{Path, PathBuf};
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicBool, Ordering};

use libc::{c_char, c_int};
use log::{debug, error, info, warn};

use msh_convert::{
    AssetParser, BackendError, ChunkFilter, ExportSession, MergeOptions, Result, SceneExporter,
};

// The converter library holds exactly one scene per process
static SESSION_OPEN: AtomicBool = AtomicBool::new(false);

/// Route native log entries into the `log` facade
pub fn install_log_bridge() {
    unsafe { sys::LOG_SetCallbackMethod(log_callback) };
}

extern "C" fn log_callback(level: c_int, message: *const c_char) {
    if message.is_null() {
        return;
    }

    let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    match level {
        sys::LOG_ERROR => error!("{message}"),
        sys::LOG_WARNING => warn!("{message}"),
        sys::LOG_INFO => info!("{message}"),
        _ => debug!("{message}"),
    }
}

fn path_to_cstring(path: &Path) -> Result<CString> {
    let utf8 = path
        .to_str()
        .ok_or_else(|| BackendError::InvalidArgument(path.display().to_string()))?;
    CString::new(utf8).map_err(|_| BackendError::InvalidArgument(utf8.to_string()))
}

fn chunk_filter_code(filter: ChunkFilter) -> c_int {
    match filter {
        ChunkFilter::None => sys::CHUNK_FILTER_NONE,
        ChunkFilter::ModelsOnly => sys::CHUNK_FILTER_ANIMATIONS,
        ChunkFilter::AnimationsOnly => sys::CHUNK_FILTER_MODELS,
    }
}

/// A parsed MSH file
#[derive(Debug)]
pub struct Msh {
    handle: NonNull<sys::MSH>,
}

impl Msh {
    fn as_ptr(&self) -> *mut sys::MSH {
        self.handle.as_ptr()
    }
}

impl Drop for Msh {
    fn drop(&mut self) {
        unsafe { sys::MSH_Delete(self.handle.as_ptr()) };
    }
}

/// Reads MSH files through LibSWBF2
#[derive(Debug, Default)]
pub struct MshParser;

impl MshParser {
    pub fn new() -> Self {
        Self
    }
}

impl AssetParser for MshParser {
    type Asset = Msh;

    fn read(&mut self, path: &Path) -> Result<Msh> {
        let c_path = path_to_cstring(path)?;
        let parse_failed = || BackendError::ParseFailed {
            path: path.to_path_buf(),
        };

        let handle = NonNull::new(unsafe { sys::MSH_Create() }).ok_or_else(parse_failed)?;
        let msh = Msh { handle };

        if unsafe { sys::MSH_ReadFromFile(msh.as_ptr(), c_path.as_ptr()) } {
            Ok(msh)
        } else {
            Err(parse_failed())
        }
    }
}

/// Opens scenes in the native FBX converter
#[derive(Debug, Default)]
pub struct FbxExporter;

impl FbxExporter {
    pub fn new() -> Self {
        Self
    }
}

impl SceneExporter for FbxExporter {
    type Asset = Msh;
    type Session = FbxSession;

    fn open(&mut self, destination: &Path) -> Result<FbxSession> {
        let c_path = path_to_cstring(destination)?;

        if SESSION_OPEN.swap(true, Ordering::AcqRel) {
            return Err(BackendError::SessionBusy);
        }

        if !unsafe { sys::Converter_Start(c_path.as_ptr()) } {
            SESSION_OPEN.store(false, Ordering::Release);
            return Err(BackendError::OpenFailed {
                path: destination.to_path_buf(),
            });
        }

        debug!("Opened FBX scene '{}'", destination.display());
        Ok(FbxSession {
            destination: destination.to_path_buf(),
            open: true,
        })
    }
}

/// The converter's open scene
#[derive(Debug)]
pub struct FbxSession {
    destination: PathBuf,
    open: bool,
}

impl FbxSession {
    fn release(&mut self) {
        if self.open {
            self.open = false;
            SESSION_OPEN.store(false, Ordering::Release);
        }
    }
}

impl ExportSession for FbxSession {
    type Asset = Msh;

    fn merge(&mut self, asset: &Msh, options: &MergeOptions) -> Result<()> {
        let animation_name = options
            .animation_name
            .as_deref()
            .map(|name| {
                CString::new(name).map_err(|_| BackendError::InvalidArgument(name.to_string()))
            })
            .transpose()?;

        let added = unsafe {
            sys::Converter_SetModelIgnoreFilter(options.ignore.bits());
            sys::Converter_SetChunkFilter(chunk_filter_code(options.chunk_filter));
            sys::Converter_SetOverrideAnimName(
                animation_name.as_ref().map_or(ptr::null(), |name| name.as_ptr()),
            );
            let added = sys::Converter_AddMSH(asset.as_ptr());
            sys::Converter_SetOverrideAnimName(ptr::null());
            added
        };

        if added {
            Ok(())
        } else {
            Err(BackendError::MergeRejected(format!(
                "could not add model data to '{}'",
                self.destination.display()
            )))
        }
    }

    fn save(mut self) -> Result<()> {
        if !unsafe { sys::Converter_Save() } {
            // Still open, dropping `self` closes the scene
            return Err(BackendError::SaveFailed {
                path: self.destination.clone(),
            });
        }

        self.release();
        debug!("Saved FBX scene '{}'", self.destination.display());
        Ok(())
    }
}

impl Drop for FbxSession {
    fn drop(&mut self) {
        if self.open {
            debug!("Closing FBX scene '{}' without saving", self.destination.display());
            unsafe { sys::Converter_Close() };
            self.release();
        }
    }
}
