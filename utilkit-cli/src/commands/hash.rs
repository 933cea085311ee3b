use std::path::PathBuf;

use utilkit_core::{HashAlgorithm, MessageMode, hash_file_with, print_message};

use crate::CliError;
use crate::settings;

/// Print `digest  path` for every file, in the style of `md5sum`.
///
/// Unreadable files are reported and skipped; the command fails at the end
/// if any file could not be hashed.
pub(crate) fn run_hash(files: &[PathBuf], algorithm: Option<HashAlgorithm>) -> Result<(), CliError> {
    let algorithm = settings::resolve_hash_algorithm(algorithm);
    log::debug!("Hashing {} file(s) with {}", files.len(), algorithm);

    let mut failed = 0usize;
    for file in files {
        match hash_file_with(file, algorithm) {
            Ok(digest) => log::info!("{}  {}", digest, file.display()),
            Err(e) => {
                failed += 1;
                print_message(
                    MessageMode::Warning,
                    &format!("{}: {}", file.display(), e),
                );
            }
        }
    }

    if failed > 0 {
        return Err(CliError::other(format!(
            "{} of {} file(s) could not be hashed",
            failed,
            files.len()
        )));
    }
    Ok(())
}
