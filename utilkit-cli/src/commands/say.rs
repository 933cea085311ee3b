use utilkit_core::{MessageMode, print_message};

/// Print `words` as one status line; unrecognised modes fall back to info.
pub(crate) fn run_say(mode: &str, words: &[String]) {
    let mode = MessageMode::from(mode);
    log::debug!("Printing {} message", mode);
    print_message(mode, &words.join(" "));
}
