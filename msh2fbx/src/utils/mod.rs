//! Shared utilities for the msh2fbx CLI

pub mod logging;
pub mod progress;

pub use progress::ConsoleProgress;
