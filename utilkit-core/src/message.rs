//! Prefixed one-line status messages.
//!
//! | mode      | prefix | stream |
//! |-----------|--------|--------|
//! | `info`    | `[#]`  | stdout |
//! | `warning` | `[?]`  | stderr |
//! | `error`   | `[!]`  | stderr |
//!
//! Unknown mode names behave like `info`.

use std::fmt;
use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageMode {
    #[default]
    Info,
    Warning,
    Error,
}

/// Which standard stream a message goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stdout,
    Stderr,
}

impl MessageMode {
    /// Bracketed marker written before the message text.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Info => "[#]",
            Self::Warning => "[?]",
            Self::Error => "[!]",
        }
    }

    fn target(&self) -> Target {
        match self {
            Self::Info => Target::Stdout,
            Self::Warning | Self::Error => Target::Stderr,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Lossy lookup: anything other than `warning` or `error` is `Info`.
impl From<&str> for MessageMode {
    fn from(s: &str) -> Self {
        match s {
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for MessageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write `message` as a single plain-text line to whichever of `out`/`err`
/// the mode selects.
pub fn write_message<O, E>(
    out: &mut O,
    err: &mut E,
    mode: MessageMode,
    message: &str,
) -> io::Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    emit(out, err, mode, mode.prefix(), message)
}

/// Print `message` to stdout or stderr according to `mode`.
///
/// The prefix is coloured when the destination stream supports it. Write
/// failures (e.g. a closed pipe) are ignored; there is nobody left to tell.
pub fn print_message(mode: impl Into<MessageMode>, message: &str) {
    let mode = mode.into();
    let prefix = styled_prefix(mode);
    let _ = emit(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        mode,
        &prefix,
        message,
    );
}

/// The mode's prefix, wrapped in colour codes if its stream supports them.
fn styled_prefix(mode: MessageMode) -> String {
    let stream = match mode.target() {
        Target::Stdout => Stream::Stdout,
        Target::Stderr => Stream::Stderr,
    };
    let prefix = mode.prefix();
    match mode {
        MessageMode::Info => format!("{}", prefix.if_supports_color(stream, |t| t.cyan())),
        MessageMode::Warning => format!("{}", prefix.if_supports_color(stream, |t| t.yellow())),
        MessageMode::Error => format!("{}", prefix.if_supports_color(stream, |t| t.red())),
    }
}

/// Shared line writer behind [`write_message`] and [`print_message`].
fn emit<O, E>(
    out: &mut O,
    err: &mut E,
    mode: MessageMode,
    prefix: &str,
    message: &str,
) -> io::Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match mode.target() {
        Target::Stdout => writeln!(out, "{prefix} {message}"),
        Target::Stderr => writeln!(err, "{prefix} {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: impl Into<MessageMode>, message: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_message(&mut out, &mut err, mode.into(), message).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_info_goes_to_stdout() {
        assert_eq!(render("info", "scanning"), ("[#] scanning\n".into(), String::new()));
    }

    #[test]
    fn test_warning_goes_to_stderr() {
        assert_eq!(render("warning", "odd size"), (String::new(), "[?] odd size\n".into()));
    }

    #[test]
    fn test_error_goes_to_stderr() {
        assert_eq!(render("error", "boom"), (String::new(), "[!] boom\n".into()));
    }

    #[test]
    fn test_unknown_mode_falls_back_to_info() {
        assert_eq!(render("loud", "hi"), ("[#] hi\n".into(), String::new()));
        assert_eq!(render("", "hi"), ("[#] hi\n".into(), String::new()));
        assert_eq!(MessageMode::from("ERROR"), MessageMode::Info);
    }

    #[test]
    fn test_styled_prefix_keeps_marker_and_stream() {
        for (name, out_expected, err_expected) in [
            ("error", false, true),
            ("warning", false, true),
            ("info", true, false),
            ("shout", true, false),
        ] {
            let mode = MessageMode::from(name);
            let prefix = styled_prefix(mode);
            assert!(prefix.contains(mode.prefix()), "{name}: {prefix:?}");

            let mut out = Vec::new();
            let mut err = Vec::new();
            emit(&mut out, &mut err, mode, &prefix, "disk full").unwrap();
            assert_eq!(!out.is_empty(), out_expected, "{name}");
            assert_eq!(!err.is_empty(), err_expected, "{name}");

            let line = String::from_utf8(if out_expected { out } else { err }).unwrap();
            assert_eq!(line, format!("{prefix} disk full\n"));
        }
    }

    #[test]
    fn test_error_prefix_on_error_stream() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let prefix = styled_prefix(MessageMode::Error);
        emit(&mut out, &mut err, MessageMode::Error, &prefix, "boom").unwrap();
        assert!(out.is_empty());
        let line = String::from_utf8(err).unwrap();
        assert!(line.contains("[!]"));
        assert!(line.ends_with(" boom\n"));
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in [MessageMode::Info, MessageMode::Warning, MessageMode::Error] {
            assert_eq!(MessageMode::from(mode.name()), mode);
            assert_eq!(mode.to_string(), mode.name());
        }
    }
}
