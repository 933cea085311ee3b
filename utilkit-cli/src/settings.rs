//! Persistent CLI settings.
//!
//! Settings live in `~/.config/utilkit/settings.toml`:
//!
//! ```toml
//! [hash]
//! algorithm = "sha1"
//! ```
//!
//! Command-line flags override the file, and the file overrides built-in
//! defaults.

use std::io;
use std::path::{Path, PathBuf};

use utilkit_core::HashAlgorithm;

/// Canonical path to the settings file: `~/.config/utilkit/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("utilkit").join("settings.toml")
}

/// Resolve the hash algorithm using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `hash.algorithm` in `settings.toml`
/// 3. [`HashAlgorithm::default`]
pub(crate) fn resolve_hash_algorithm(cli_override: Option<HashAlgorithm>) -> HashAlgorithm {
    cli_override
        .or_else(|| load_hash_algorithm(&settings_path()))
        .unwrap_or_default()
}

/// Read `hash.algorithm` from the settings file at `path`, if set and valid.
pub(crate) fn load_hash_algorithm(path: &Path) -> Option<HashAlgorithm> {
    let doc = load_document(path)?;
    let name = doc.get(HASH_SECTION)?.get(ALGORITHM_KEY)?.as_str()?;
    match name.parse() {
        Ok(algo) => Some(algo),
        Err(e) => {
            log::warn!("Ignoring hash.algorithm in {}: {}", path.display(), e);
            None
        }
    }
}

/// Save (or clear) `hash.algorithm` in the settings file at `path`.
///
/// Other keys in the file are preserved. An existing file that does not
/// parse is left untouched and reported as [`io::ErrorKind::InvalidData`].
pub(crate) fn save_hash_algorithm(path: &Path, algorithm: Option<HashAlgorithm>) -> io::Result<()> {
    let mut doc = read_document(path)?.unwrap_or_default();
    let value = algorithm.map(|algo| toml::Value::String(algo.name().to_string()));
    set_entry(&mut doc, HASH_SECTION, ALGORITHM_KEY, value)?;
    write_atomic(path, &doc)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string(path: &Path) -> Option<String> {
    let doc = load_document(path)?;
    toml::to_string_pretty(&doc).ok()
}

const HASH_SECTION: &str = "hash";
const ALGORITHM_KEY: &str = "algorithm";

/// Parsed settings file; `Ok(None)` when it does not exist yet.
fn read_document(path: &Path) -> io::Result<Option<toml::Table>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    contents.parse::<toml::Table>().map(Some).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} is not valid TOML: {}", path.display(), e),
        )
    })
}

/// Lenient variant of [`read_document`] for read-only callers.
fn load_document(path: &Path) -> Option<toml::Table> {
    match read_document(path) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

/// Set `[section] key = value`, or remove the key when `value` is `None`.
///
/// A section left empty by a removal is dropped as well.
fn set_entry(
    doc: &mut toml::Table,
    section: &str,
    key: &str,
    value: Option<toml::Value>,
) -> io::Result<()> {
    match value {
        Some(value) => {
            let table = doc
                .entry(section)
                .or_insert_with(|| toml::Value::Table(toml::Table::new()))
                .as_table_mut()
                .ok_or_else(|| io::Error::other(format!("[{section}] is not a table")))?;
            table.insert(key.to_string(), value);
        }
        None => {
            let emptied = match doc.get_mut(section).and_then(toml::Value::as_table_mut) {
                Some(table) => {
                    table.remove(key);
                    table.is_empty()
                }
                None => false,
            };
            if emptied {
                doc.remove(section);
            }
        }
    }
    Ok(())
}

/// Replace `path` with `doc` via a sibling temp file and rename.
fn write_atomic(path: &Path, doc: &toml::Table) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(doc).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, serialized)?;
    std::fs::rename(&tmp, path)
}
