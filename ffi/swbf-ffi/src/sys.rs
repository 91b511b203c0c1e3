//! Raw declarations of the native C API
//!
//! `MSH_*` and `LOG_*` come from the LibSWBF2 API wrapper, `Converter_*`
//! from the C surface of the FBX converter library. The converter keeps a
//! single scene per process.

use libc::{c_char, c_int};

/// Opaque LibSWBF2 MSH handle
#[repr(C)]
pub struct MSH {
    _private: [u8; 0],
}

/// Native log callback: level (0 info, 1 warning, 2 error) and message
pub type LogCallback = extern "C" fn(level: c_int, message: *const c_char);

pub const LOG_INFO: c_int = 0;
pub const LOG_WARNING: c_int = 1;
pub const LOG_ERROR: c_int = 2;

/// Honor every chunk
pub const CHUNK_FILTER_NONE: c_int = 0;
/// Skip animation chunks
pub const CHUNK_FILTER_ANIMATIONS: c_int = 1;
/// Skip model chunks
pub const CHUNK_FILTER_MODELS: c_int = 2;

unsafe extern "C" {
    pub fn MSH_Create() -> *mut MSH;
    pub fn MSH_Delete(msh: *mut MSH);
    pub fn MSH_ReadFromFile(msh: *mut MSH, path: *const c_char) -> bool;

    pub fn LOG_SetCallbackMethod(callback: LogCallback);

    pub fn Converter_Start(fbx_path: *const c_char) -> bool;
    pub fn Converter_AddMSH(msh: *const MSH) -> bool;
    /// Writes the scene and closes it. On failure the scene stays open and
    /// `Converter_Close` must follow.
    pub fn Converter_Save() -> bool;
    pub fn Converter_Close();
    pub fn Converter_SetModelIgnoreFilter(filter: u16);
    pub fn Converter_SetChunkFilter(filter: c_int);
    /// A null pointer clears the override
    pub fn Converter_SetOverrideAnimName(name: *const c_char);
}
