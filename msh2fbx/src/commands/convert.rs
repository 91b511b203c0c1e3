//! The conversion command

use anyhow::Result;
use log::{info, warn};

use msh_convert::{
    InputSet, Job, MSH_EXTENSION, OutputMode, Summary, collect_files, ignore_mask,
};

use crate::cli::{self, Cli};

/// What the command line asks for
#[derive(Debug, PartialEq, Eq)]
pub enum Plan {
    /// The arguments are unusable: explain why and show the help
    Usage(String),
    /// Convert these files
    Run(Job),
}

/// Validate the destination, crawl the inputs and build the ignore mask
pub fn plan(cli: &Cli) -> Plan {
    let output = match OutputMode::resolve(cli.destination.as_deref()) {
        Ok(output) => output,
        Err(e) => return Plan::Usage(e.to_string()),
    };

    if !cli.has_inputs() {
        return Plan::Usage("No MSH files given!".to_string());
    }

    let inputs = InputSet {
        full: collect_files(&cli.files, MSH_EXTENSION, cli.recursive),
        animations: collect_files(&cli.animations, MSH_EXTENSION, cli.recursive),
        models: collect_files(&cli.models, MSH_EXTENSION, cli.recursive),
    };

    Plan::Run(Job {
        inputs,
        output,
        ignore: ignore_mask(&cli.ignore),
        override_animation_name: cli.override_anim_name,
    })
}

/// Run the command. Unusable arguments print the help and still succeed.
pub fn execute(cli: &Cli) -> Result<()> {
    match plan(cli) {
        Plan::Usage(reason) => {
            warn!("{reason}");
            cli::command().print_help()?;
            Ok(())
        }
        Plan::Run(job) => {
            if job.inputs.is_empty() {
                warn!("No MSH files found in the given paths");
            }
            if let Some(summary) = convert(&job) {
                for path in &summary.written {
                    info!("Wrote '{}'", path.display());
                }
            }
            Ok(())
        }
    }
}

#[cfg(feature = "native")]
fn convert(job: &Job) -> Option<Summary> {
    use crate::utils::ConsoleProgress;
    use msh_convert::Converter;
    use swbf_ffi::{FbxExporter, MshParser};

    let mut converter = Converter::new(MshParser::new(), FbxExporter::new());
    let mut progress = ConsoleProgress::stdout();
    Some(converter.run(job, &mut progress))
}

#[cfg(not(feature = "native"))]
fn convert(job: &Job) -> Option<Summary> {
    log::error!(
        "No conversion backend available, {} MSH files were not converted. \
         Rebuild msh2fbx with the `native` feature to link LibSWBF2 and the FBX converter.",
        job.inputs.total()
    );
    None
}
