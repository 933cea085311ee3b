use std::path::Path;

use utilkit_core::find_files;

/// List files under `path` ending in `.{extension}`.
///
/// A leading dot on `extension` is tolerated (`.txt` and `txt` are the same).
pub(crate) fn run_find(path: &Path, extension: &str, sorted: bool) {
    let extension = extension.trim_start_matches('.');
    let mut files = find_files(path, extension);
    if sorted {
        files.sort();
    }

    for file in &files {
        log::info!("{}", file.display());
    }
    log::debug!("{} file(s) matching .{}", files.len(), extension);
}
