//! Clipboard functionality

use crate::utils::error::SummarizerError;
use arboard::Clipboard;

/// Read text for the link field
pub fn get_clipboard_content() -> Result<String, SummarizerError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| SummarizerError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map(|text| text.trim().to_string())
        .map_err(|e| SummarizerError::Clipboard(format!("Failed to read clipboard: {}", e)))
}

/// Put the visible summary on the clipboard
pub fn set_clipboard_content(text: &str) -> Result<(), SummarizerError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| SummarizerError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| SummarizerError::Clipboard(format!("Failed to write clipboard: {}", e)))
}
