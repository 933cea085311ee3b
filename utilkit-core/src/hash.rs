//! Whole-file content digests.
//!
//! Files are read into memory in one go; this is meant for ordinary files,
//! not multi-gigabyte disc images.

use std::fs;
use std::path::Path;

use sha1::Digest;

use crate::error::Result;

/// Digest algorithms available for file hashing.
///
/// None of these are suitable against an adversary; they are fingerprints
/// for telling files apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// MD5 (128-bit, 32 hex chars)
    #[default]
    Md5,
    /// CRC-32 (32-bit, 8 hex chars)
    Crc32,
    /// SHA-1 (160-bit, 40 hex chars)
    Sha1,
}

const ALL_ALGORITHMS: &[HashAlgorithm] =
    &[HashAlgorithm::Md5, HashAlgorithm::Crc32, HashAlgorithm::Sha1];

impl HashAlgorithm {
    pub fn all() -> &'static [HashAlgorithm] {
        ALL_ALGORITHMS
    }

    /// Lowercase name used on the command line and in settings files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Crc32 => "crc32",
            Self::Sha1 => "sha1",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashAlgorithmParseError(pub String);

impl std::fmt::Display for HashAlgorithmParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown hash algorithm: '{}'", self.0)
    }
}

impl std::error::Error for HashAlgorithmParseError {}

impl std::str::FromStr for HashAlgorithm {
    type Err = HashAlgorithmParseError;

    /// Case-insensitive; `crc` and `sha-1` are accepted as aliases.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "crc32" | "crc" => Ok(Self::Crc32),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            _ => Err(HashAlgorithmParseError(s.to_string())),
        }
    }
}

/// MD5 digest of the file at `path` as lowercase hex.
///
/// Open and read failures are returned unchanged as [`Error::Io`](crate::Error::Io).
pub fn hash_file(path: impl AsRef<Path>) -> Result<String> {
    hash_file_with(path, HashAlgorithm::default())
}

/// Digest of the file at `path` using `algorithm`, as lowercase hex.
pub fn hash_file_with(path: impl AsRef<Path>, algorithm: HashAlgorithm) -> Result<String> {
    let data = fs::read(path)?;
    Ok(hash_bytes(&data, algorithm))
}

/// Digest of an in-memory buffer as lowercase hex.
pub fn hash_bytes(data: &[u8], algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", md5::compute(data)),
        HashAlgorithm::Crc32 => format!("{:08x}", crc32fast::hash(data)),
        HashAlgorithm::Sha1 => format!("{:x}", sha1::Sha1::digest(data)),
    }
}
