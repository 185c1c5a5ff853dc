use std::fs;
use std::path::Path;

use crate::utils::error::{BoxResult, BuildError};

/// Read a whole file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| {
        BuildError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Write a string to a file, truncating any existing content
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let path = path.as_ref();
    let to_error = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
    }

    fs::write(path, contents.as_bytes()).map_err(to_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.html");

        write_file(&path, "<p>hello</p>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.html");

        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "short").unwrap();
        assert_eq!(read_file(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_file(dir.path().join("missing.md")).unwrap_err();

        assert!(err.to_string().starts_with("Failed to read"));
        assert!(err.to_string().contains("missing.md"));
    }
}
