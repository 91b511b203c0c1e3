//! Root CLI structure for msh2fbx

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use msh_convert::ModelPurpose;

const LONG_ABOUT: &str = "\
--------------------------------------------------------------
-------------------- MSH to FBX Converter --------------------
--------------------------------------------------------------

This tool can convert multiple MSHs at once! If no destination
is specified (via the -d option), all resulting FBX files will
be placed in the exact same location where the respective MSH
files lie.
If some directory is specified, that directory must exist.
If a specific FBX File Name is given, all MSHs will be merged
into that single FBX File!

Note that all resulting FBX Files will be overwritten
without question!";

#[derive(Parser, Debug)]
#[command(name = "msh2fbx")]
#[command(about = "Convert Star Wars Battlefront II MSH files to FBX", long_about = LONG_ABOUT)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// MSH file paths (file or directory, one or more), importing everything
    #[arg(short = 'f', long = "files", value_name = "PATH", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// MSH file paths (file or directory, one or more), importing Animation Data only
    #[arg(short = 'a', long = "animations", value_name = "PATH", num_args = 1..)]
    pub animations: Vec<PathBuf>,

    /// MSH file paths (file or directory, one or more), importing Model Data only
    #[arg(short = 'm', long = "models", value_name = "PATH", num_args = 1..)]
    pub models: Vec<PathBuf>,

    /// Folder destination or specific FBX File Name (see details above)
    #[arg(short = 'd', long = "destination", value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Use the MSH file name as Animation name, rather than the Animation name stored inside the MSH file
    #[arg(short = 'o', long = "override-anim-name")]
    pub override_anim_name: bool,

    /// For all given directories, crawling will be recursive (includes all sub-directories)
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Model categories to ignore
    #[arg(short = 'i', long = "ignore", value_name = "CATEGORY", num_args = 1..)]
    pub ignore: Vec<String>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Parse the process arguments, exiting on syntax errors
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse arguments from an iterator
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Whether any input list was given
    pub fn has_inputs(&self) -> bool {
        !(self.files.is_empty() && self.animations.is_empty() && self.models.is_empty())
    }
}

/// The clap command, with the accepted `--ignore` categories in its help
pub fn command() -> Command {
    let categories: String = ModelPurpose::NAMES
        .iter()
        .map(|(name, _)| format!("\n    {name}"))
        .collect();

    Cli::command().mut_arg("ignore", |arg| {
        arg.long_help(format!("What to ignore. Options are:{categories}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_args_from([
            "msh2fbx",
            "-f",
            "a.msh",
            "units",
            "-a",
            "walk.msh",
            "-m",
            "rep_inf.msh",
            "-d",
            "out.fbx",
            "-o",
            "-r",
            "-i",
            "Mesh_Collision",
            "-i",
            "Point",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("a.msh"), PathBuf::from("units")]);
        assert_eq!(cli.animations, vec![PathBuf::from("walk.msh")]);
        assert_eq!(cli.models, vec![PathBuf::from("rep_inf.msh")]);
        assert_eq!(cli.destination, Some(PathBuf::from("out.fbx")));
        assert!(cli.override_anim_name);
        assert!(cli.recursive);
        assert_eq!(cli.ignore, vec!["Mesh_Collision", "Point"]);
        assert!(cli.has_inputs());
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_args_from([
            "msh2fbx",
            "--models",
            "m.msh",
            "--override-anim-name",
            "--recursive",
            "--destination",
            "out",
        ])
        .unwrap();

        assert_eq!(cli.models, vec![PathBuf::from("m.msh")]);
        assert!(cli.files.is_empty());
        assert!(cli.override_anim_name);
        assert!(cli.recursive);
        assert_eq!(cli.destination, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_no_inputs() {
        let cli = Cli::try_parse_args_from(["msh2fbx"]).unwrap();
        assert!(!cli.has_inputs());
        assert!(cli.destination.is_none());
    }

    #[test]
    fn test_ignore_help_lists_categories() {
        let help = command().render_long_help().to_string();
        for (name, _) in ModelPurpose::NAMES {
            assert!(help.contains(name), "help is missing '{name}'");
        }
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_args_from(["msh2fbx", "--bogus"]).is_err());
    }
}
