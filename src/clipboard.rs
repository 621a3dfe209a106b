//! Best-effort hand-off of the share text to the OS clipboard.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Receives the final share text. Returns whether it was actually copied.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Clipboard for F {
    fn copy(&mut self, text: &str) -> bool {
        self(text)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&mut self, _text: &str) -> bool {
        false
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(windows)]
const COPY_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", windows)))]
const COPY_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

fn pipe_into(argv: &[&str], text: &str) -> io::Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    // stdin is dropped before waiting so the tool sees EOF; the child is
    // reaped even when the write fails.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        for argv in COPY_COMMANDS {
            match pipe_into(argv, text) {
                Ok(()) => {
                    log::debug!("Share text copied with {}", argv[0]);
                    return true;
                }
                Err(e) => log::debug!("Clipboard tool {} failed: {e}", argv[0]),
            }
        }
        log::warn!("Could not copy share text to the clipboard");
        false
    }
}
