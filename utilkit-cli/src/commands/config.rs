use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use utilkit_core::HashAlgorithm;

use crate::CliError;
use crate::settings;

/// Show the settings file and the effective defaults.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "utilkit Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let saved = settings::load_hash_algorithm(&path);
    let effective = settings::resolve_hash_algorithm(None);
    let source = if saved.is_some() {
        "(settings file)"
    } else {
        "(default)"
    };
    log::info!(
        "  Hash algorithm: {} {}",
        effective.if_supports_color(Stdout, |t| t.bold()),
        source.if_supports_color(Stdout, |t| t.dimmed()),
    );
    let available: Vec<&str> = HashAlgorithm::all().iter().map(|a| a.name()).collect();
    log::info!("  Available: {}", available.join(", "));

    if let Some(contents) = settings::load_settings_string(&path) {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Persist (or clear, with `None`) the default hash algorithm.
pub(crate) fn run_config_set_algorithm(algorithm: Option<HashAlgorithm>) -> Result<(), CliError> {
    let path = settings::settings_path();
    settings::save_hash_algorithm(&path, algorithm)
        .map_err(|e| CliError::config(format!("Failed to save {}: {}", path.display(), e)))?;

    match algorithm {
        Some(algo) => log::info!(
            "{} Default hash algorithm set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            algo,
        ),
        None => log::info!(
            "{} Default hash algorithm cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    Ok(())
}
