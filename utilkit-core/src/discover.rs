//! Recursive file discovery by extension.
//!
//! Missing or unreadable paths are treated as empty rather than as errors:
//! callers ask "which files match?" and an absent directory simply has none.

use std::fs;
use std::path::{Path, PathBuf};

/// Find files under `path` whose extension is `extension` (no leading dot).
///
/// - A directory is walked recursively; every file whose name ends with
///   `.{extension}` is returned. Order follows the filesystem and is not
///   sorted. Symlinked directories are not followed.
/// - A single file is returned on its own if its name ends with
///   `.{extension}`, the same rule the directory walk applies.
/// - Anything else (including a path that does not exist) yields an empty
///   list.
pub fn find_files(path: impl AsRef<Path>, extension: &str) -> Vec<PathBuf> {
    let path = path.as_ref();
    let suffix = format!(".{extension}");
    if path.is_dir() {
        let mut found = Vec::new();
        walk(path, &suffix, &mut found);
        found
    } else if path.is_file() && name_ends_with(path, &suffix) {
        vec![path.to_path_buf()]
    } else {
        Vec::new()
    }
}

/// Depth-first walk collecting non-directory entries whose name ends with `suffix`.
fn walk(dir: &Path, suffix: &str, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            walk(&path, suffix, found);
        } else if !path.is_dir() && name_ends_with(&path, suffix) {
            found.push(path);
        }
    }
}

fn name_ends_with(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(suffix))
        .unwrap_or(false)
}
