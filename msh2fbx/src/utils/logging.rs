//! Console logger setup

use std::fmt;
use std::io::{self, Write};

use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};

use super::progress;

/// Install the global logger.
///
/// Only warnings and errors reach the console unless `RUST_LOG` or the
/// verbosity flags say otherwise. Lines go to standard output, next to the
/// progress bar, and start with a carriage return while the bar is shown.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stdout).format(|buf, record| {
        write_line(buf, record.level(), *record.args(), progress::is_active())
    });

    if let Some(level) = level_filter(verbose, quiet) {
        builder.filter_level(level);
    }

    builder.init();
}

/// Write one log line. Only debug and trace lines carry a level tag.
fn write_line(
    out: &mut impl Write,
    level: Level,
    args: fmt::Arguments<'_>,
    bar_active: bool,
) -> io::Result<()> {
    if bar_active {
        write!(out, "\r")?;
    }
    match level {
        Level::Debug | Level::Trace => writeln!(out, "[{level}] {args}"),
        _ => writeln!(out, "{args}"),
    }
}

fn level_filter(verbose: u8, quiet: bool) -> Option<LevelFilter> {
    match verbose {
        0 if quiet => Some(LevelFilter::Error),
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}
