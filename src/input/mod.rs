use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod clipboard;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("document is empty: {}", .0.display())]
    EmptyDocument(PathBuf),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

/// Reads a UTF-8 text file, rejecting whitespace-only contents up front so
/// the reader never opens on a blank document.
pub fn load_file(path: &str) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyDocument(PathBuf::from(path)));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("quickread_{name}"))
    }

    fn write_file(path: &Path, contents: &[u8]) {
        let mut file = File::create(path).unwrap();
        file.write_all(contents).unwrap();
    }

    #[test]
    fn test_valid_file_loads() {
        let path = temp_path("valid.txt");
        write_file(&path, b"hello world");

        let result = load_file(path.to_str().unwrap());
        assert_eq!(result.unwrap(), "hello world");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let path = temp_path("empty.txt");
        write_file(&path, b"");

        let result = load_file(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::EmptyDocument(_))));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_whitespace_only_file_is_rejected() {
        let path = temp_path("blank.txt");
        write_file(&path, b"  \n\t \n");

        let result = load_file(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::EmptyDocument(_))));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_file("quickread_no_such_file_12345.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
