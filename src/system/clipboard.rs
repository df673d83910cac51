//! System clipboard access

use crate::errors::{BitsnipError, Result};

/// Write text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| BitsnipError::clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| BitsnipError::clipboard(e.to_string()))?;
    Ok(())
}
