use std::path::Path;

use utilkit_core::{file_extension, file_name};

/// Print the base name of `path`, or just its extension with `extension_only`.
pub(crate) fn run_name(path: &Path, keep_extension: bool, extension_only: bool) {
    if extension_only {
        if let Some(ext) = file_extension(path) {
            log::info!("{}", ext);
        }
        return;
    }
    log::info!("{}", file_name(path, keep_extension));
}
