//! System clipboard access.

use crate::error::ClientError;

/// Copies the given text to the system clipboard.
///
/// Denial (headless session, missing display server, platform refusal) is
/// reported as [`ClientError::ClipboardDenied`].
pub fn copy_text(text: &str) -> Result<(), ClientError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClientError::ClipboardDenied(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClientError::ClipboardDenied(e.to_string()))
}
