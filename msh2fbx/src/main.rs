//! Main entry point for the msh2fbx CLI

use anyhow::Result;
use clap_complete::{Generator, generate};
use std::io;

use msh2fbx::cli::{self, Cli};
use msh2fbx::commands;
use msh2fbx::utils::logging;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logger
    logging::init(cli.verbose, cli.quiet);

    #[cfg(feature = "native")]
    swbf_ffi::install_log_bridge();

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut cli::command());
        return Ok(());
    }

    commands::convert::execute(&cli)
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
