//! Clipboard integration: copy a synonym out, paste a word in
//!
//! Uses arboard for cross-platform clipboard access

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to system clipboard
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    tracing::debug!("Copied '{}' to clipboard", text);
    Ok(())
}

/// Paste text from system clipboard
pub fn paste() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    let text = clipboard.get_text().context("Clipboard holds no text")?;
    tracing::debug!("Pasted {} bytes from clipboard", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires clipboard access, may fail in CI
    fn test_copy_paste() {
        copy("joyful").expect("Copy failed");
        assert_eq!(paste().expect("Paste failed"), "joyful");
    }

    #[test]
    fn test_empty_copy() {
        // Should not touch the clipboard at all
        assert!(copy("").is_ok());
    }
}
