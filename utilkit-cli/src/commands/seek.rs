use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;

use utilkit_core::{MessageMode, print_message, seek_to};

use crate::CliError;

/// Search `file` for `pattern` starting at byte `from`.
pub(crate) fn run_seek(file: &Path, pattern: &str, hex: bool, from: u64) -> Result<(), CliError> {
    let bytes = if hex {
        parse_hex_pattern(pattern)?
    } else {
        pattern.as_bytes().to_vec()
    };
    if bytes.is_empty() {
        return Err(CliError::invalid_pattern("pattern is empty"));
    }

    let mut reader = File::open(file)?;
    if from > 0 {
        reader.seek(SeekFrom::Start(from))?;
    }
    log::debug!(
        "Searching {} for {} byte(s) from offset {}",
        file.display(),
        bytes.len(),
        from
    );

    match seek_to(&mut reader, &bytes)? {
        Some(offset) => {
            log::debug!("Match starts at offset {}", offset - bytes.len() as u64);
            log::info!("{}", offset);
        }
        None => print_message(
            MessageMode::Warning,
            &format!("Pattern not found in {}", file.display()),
        ),
    }
    Ok(())
}

/// Decode a hex string into bytes.
///
/// Whitespace, `:` and `-` separators are ignored and an optional `0x`
/// prefix is allowed, so `"de ad be ef"`, `"DE:AD:BE:EF"` and `"0xdeadbeef"`
/// all decode the same way.
pub(crate) fn parse_hex_pattern(s: &str) -> Result<Vec<u8>, CliError> {
    let trimmed = s.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: Vec<u8> = body
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':' && *b != b'-')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(CliError::invalid_pattern(format!(
            "odd number of hex digits in '{}'",
            s
        )));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = hex_value(pair[0]);
            let lo = hex_value(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(CliError::invalid_pattern(format!(
                    "'{}{}' is not a hex byte",
                    pair[0] as char, pair[1] as char
                ))),
            }
        })
        .collect()
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_pattern_formats() {
        let expected = vec![0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(parse_hex_pattern("deadbeef").unwrap(), expected);
        assert_eq!(parse_hex_pattern("de ad be ef").unwrap(), expected);
        assert_eq!(parse_hex_pattern("DE:AD:BE:EF").unwrap(), expected);
        assert_eq!(parse_hex_pattern("0xDEADBEEF").unwrap(), expected);
        assert_eq!(parse_hex_pattern("de-ad-be-ef").unwrap(), expected);
    }

    #[test]
    fn test_parse_hex_pattern_rejects_bad_input() {
        assert!(parse_hex_pattern("abc").is_err());
        assert!(parse_hex_pattern("zz").is_err());
        assert!(parse_hex_pattern("0x1g").is_err());
    }

    #[test]
    fn test_parse_hex_pattern_empty() {
        assert!(parse_hex_pattern("").unwrap().is_empty());
    }
}
