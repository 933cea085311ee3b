//! utilkit CLI
//!
//! Command-line front end for the utilkit-core file and stream utilities.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use utilkit_core::{MessageMode, print_message};

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli.command) {
        print_message(MessageMode::Error, &e.to_string());
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Seek {
            file,
            pattern,
            hex,
            from,
        } => commands::seek::run_seek(&file, &pattern, hex, from),
        Commands::Hash { files, algorithm } => commands::hash::run_hash(&files, algorithm),
        Commands::Find {
            path,
            extension,
            sorted,
        } => {
            commands::find::run_find(&path, &extension, sorted);
            Ok(())
        }
        Commands::Name {
            path,
            keep_extension,
            extension_only,
        } => {
            commands::name::run_name(&path, keep_extension, extension_only);
            Ok(())
        }
        Commands::Stamp => {
            commands::system::run_stamp();
            Ok(())
        }
        Commands::ExeDir => commands::system::run_exe_dir(),
        Commands::Float { value, default } => {
            commands::float::run_float(&value, default);
            Ok(())
        }
        Commands::Say { mode, message } => {
            commands::say::run_say(&mode, &message);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetAlgorithm { algorithm } => {
                commands::config::run_config_set_algorithm(Some(algorithm))
            }
            ConfigAction::ClearAlgorithm => commands::config::run_config_set_algorithm(None),
        },
    }
}
