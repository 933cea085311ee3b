//! Locating the running program on disk.
//!
//! This is the only module that reads process-wide state. Everything it
//! derives from that state goes through [`parent_dir`], which is pure.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Full path of the running program.
///
/// Prefers the OS-reported executable. If the platform cannot report it,
/// falls back to the entry path from `argv[0]`, resolved against the
/// current directory when relative.
pub fn program_path() -> Result<PathBuf> {
    if let Ok(exe) = env::current_exe() {
        return Ok(exe);
    }

    let entry = env::args_os()
        .next()
        .map(PathBuf::from)
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| Error::program_path("no executable path and empty argv[0]"))?;

    if entry.is_absolute() {
        Ok(entry)
    } else {
        Ok(env::current_dir()?.join(entry))
    }
}

/// Directory containing the running program.
pub fn program_dir() -> Result<PathBuf> {
    let path = program_path()?;
    parent_dir(&path)
        .ok_or_else(|| Error::program_path(format!("{} has no parent directory", path.display())))
}

/// Directory part of a program path; `None` for bare roots.
///
/// A bare file name (`"tool"`) resolves to `"."`.
pub fn parent_dir(program: &Path) -> Option<PathBuf> {
    match program.parent() {
        Some(p) if p.as_os_str().is_empty() => Some(PathBuf::from(".")),
        Some(p) => Some(p.to_path_buf()),
        None => None,
    }
}
