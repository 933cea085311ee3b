//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use utilkit_core::HashAlgorithm;

#[derive(Parser)]
#[command(name = "utilkit")]
#[command(about = "Small file and stream utilities", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the offset just past the first occurrence of a byte pattern
    Seek {
        /// File to search
        file: PathBuf,

        /// Pattern to look for (raw text, or hex with --hex)
        pattern: String,

        /// Interpret the pattern as hex bytes (e.g. "de ad be ef")
        #[arg(long)]
        hex: bool,

        /// Byte offset to start searching from
        #[arg(long, default_value_t = 0)]
        from: u64,
    },

    /// Print content digests of files
    Hash {
        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Digest algorithm (md5, crc32, sha1); defaults to the configured one
        #[arg(short, long)]
        algorithm: Option<HashAlgorithm>,
    },

    /// Recursively list files with a given extension
    Find {
        /// Directory to walk, or a single file to test
        path: PathBuf,

        /// Extension to match, without the leading dot
        extension: String,

        /// Sort the output by path
        #[arg(short, long)]
        sorted: bool,
    },

    /// Print the file name part of a path
    Name {
        path: PathBuf,

        /// Keep the extension
        #[arg(short = 'e', long)]
        keep_extension: bool,

        /// Print only the extension (nothing if the path has none)
        #[arg(short = 'x', long, conflicts_with = "keep_extension")]
        extension_only: bool,
    },

    /// Print the current UTC time (ISO-8601, second precision)
    Stamp,

    /// Print the directory containing this executable
    ExeDir,

    /// Parse a value as a float, falling back to a default
    Float {
        /// Value to parse; negative numbers are taken literally
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Value to print when parsing fails
        #[arg(short, long, allow_negative_numbers = true)]
        default: Option<f64>,
    },

    /// Print a prefixed status message (modes: info, warning, error)
    Say {
        /// Message mode; unknown modes are treated as info
        mode: String,

        /// Message text
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Manage utilkit settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings file contents
    Show,

    /// Print the settings file path
    Path,

    /// Set the default hash algorithm
    SetAlgorithm {
        /// md5, crc32 or sha1
        algorithm: HashAlgorithm,
    },

    /// Remove the saved default hash algorithm
    ClearAlgorithm,
}
