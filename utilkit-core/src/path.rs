//! Syntactic file-name helpers. Nothing here touches the filesystem.

use std::path::Path;

/// Base name of `path`, with or without its extension.
///
/// Only the last extension is stripped (`"a.tar.gz"` → `"a.tar"`), and a
/// leading dot is not treated as one (`".profile"` stays `".profile"`).
/// Returns an empty string when the path has no final component.
pub fn file_name(path: impl AsRef<Path>, keep_extension: bool) -> String {
    let path = path.as_ref();
    let part = if keep_extension {
        path.file_name()
    } else {
        path.file_stem()
    };
    part.map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Last extension of `path` without the dot, if it has one.
pub fn file_extension(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
}
