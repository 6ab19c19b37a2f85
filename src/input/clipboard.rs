use arboard::Clipboard;

use super::LoadError;

/// Fetches the system clipboard contents as text.
pub fn load() -> Result<String, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|err| LoadError::Clipboard(err.to_string()))?;
    clipboard
        .get_text()
        .map_err(|err| LoadError::Clipboard(err.to_string()))
}
