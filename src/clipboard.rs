//! Clipboard access for pasting HTML into blank windows.
//!
//! The manager reads through the [`ClipboardSource`] trait so hosts (and
//! tests) can substitute their own source; [`SystemClipboard`] wraps the
//! `arboard` crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

pub trait ClipboardSource {
    /// Read the clipboard as text. An empty clipboard yields an empty string.
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// The platform clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut cb = arboard::Clipboard::new()?;
        match cb.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(err) => Err(ClipboardError::from(err)),
        }
    }
}

/// Try to create a clipboard instance to detect availability.
pub fn available() -> bool {
    arboard::Clipboard::new().is_ok()
}
