//! Small standalone file and stream utilities.
//!
//! Every function here is independent: no shared state, no initialisation,
//! nothing to tear down. The only process-wide query lives in [`process`].

use std::io::{Read, Seek};

pub mod discover;
pub mod error;
pub mod hash;
pub mod message;
pub mod parse;
pub mod path;
pub mod process;
pub mod search;
pub mod timestamp;

pub use discover::find_files;
pub use error::{Error, Result};
pub use hash::{HashAlgorithm, hash_bytes, hash_file, hash_file_with};
pub use message::{MessageMode, print_message, write_message};
pub use parse::{FloatSource, parse_float_or};
pub use path::{file_extension, file_name};
pub use process::{program_dir, program_path};
pub use search::seek_to;
pub use timestamp::{format_timestamp, timestamp};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
