use arboard::Clipboard;

use crate::domain::{AppError, ClipboardWriter, Result};

/// System clipboard backed by `arboard`.
///
/// A fresh handle is opened per write so a missing display server only
/// fails the write, not startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().map_err(AppError::clipboard)?;
        clipboard.set_text(text).map_err(AppError::clipboard)
    }
}
