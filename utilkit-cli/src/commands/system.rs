//! Commands that report on the running process and clock.

use utilkit_core::{program_dir, timestamp};

use crate::CliError;

pub(crate) fn run_stamp() {
    log::info!("{}", timestamp());
}

pub(crate) fn run_exe_dir() -> Result<(), CliError> {
    let dir = program_dir()?;
    log::info!("{}", dir.display());
    Ok(())
}
