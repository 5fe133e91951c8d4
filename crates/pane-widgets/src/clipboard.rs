//! Clipboard backends
//!
//! Writes are best-effort: a backend reports success or failure and
//! callers decide what to surface.

#[cfg(target_os = "linux")]
use std::io::Write;
#[cfg(target_os = "linux")]
use std::process::{Command, Stdio};

/// System clipboard seam
pub trait ClipboardBackend {
    /// Place text on the clipboard; true on success
    fn write_text(&mut self, text: &str) -> bool;

    /// Read text back from the clipboard, if supported
    fn read_text(&mut self) -> Option<String>;
}

/// In-process clipboard for tests and headless embedding
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write, for exercising the
    /// best-effort path
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail_writes: true,
        }
    }

    /// Current contents without consuming them
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> bool {
        if self.fail_writes {
            return false;
        }
        self.contents = Some(text.to_string());
        true
    }

    fn read_text(&mut self) -> Option<String> {
        self.contents.clone()
    }
}

/// Real clipboard via xclip/xsel child processes (Linux only; a no-op
/// reporting failure elsewhere)
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "linux")]
fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };
    let wrote = child
        .stdin
        .as_mut()
        .is_some_and(|stdin| stdin.write_all(text.as_bytes()).is_ok());
    wrote && child.wait().map(|s| s.success()).unwrap_or(false)
}

#[cfg(target_os = "linux")]
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if output.status.success() {
        String::from_utf8(output.stdout).ok()
    } else {
        None
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> bool {
        #[cfg(target_os = "linux")]
        {
            pipe_to("xclip", &["-selection", "clipboard"], text)
                || pipe_to("xsel", &["--clipboard", "--input"], text)
        }
        #[cfg(not(target_os = "linux"))]
        {
            let _ = text;
            false
        }
    }

    fn read_text(&mut self) -> Option<String> {
        #[cfg(target_os = "linux")]
        {
            capture("xclip", &["-selection", "clipboard", "-o"])
                .or_else(|| capture("xsel", &["--clipboard", "--output"]))
        }
        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_roundtrip() {
        let mut clipboard = MemoryClipboard::new();

        assert!(clipboard.write_text("hello"));
        assert_eq!(clipboard.read_text().as_deref(), Some("hello"));
        assert_eq!(clipboard.contents(), Some("hello"));
    }

    #[test]
    fn test_failing_clipboard() {
        let mut clipboard = MemoryClipboard::failing();

        assert!(!clipboard.write_text("hello"));
        assert_eq!(clipboard.read_text(), None);
    }

    #[test]
    fn test_system_clipboard_does_not_panic() {
        let mut clipboard = SystemClipboard::new();
        let _ = clipboard.write_text("probe");
        let _ = clipboard.read_text();
    }
}
