//! Logger setup for the CLI.
//!
//! Normal output is plain `log::info!` lines on stdout so commands read like
//! ordinary tools. `--verbose` switches to env_logger's default format with
//! timestamps and levels, and `UTILKIT_LOG` can override the level filter.

use std::io::Write;

use log::LevelFilter;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.target(env_logger::Target::Stdout);
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.parse_env("UTILKIT_LOG");
    builder.init();
}
