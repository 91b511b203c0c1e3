//! msh2fbx library
//!
//! Command line front end for converting Star Wars Battlefront II MSH files
//! to FBX.

pub mod cli;
pub mod commands;
pub mod utils;
