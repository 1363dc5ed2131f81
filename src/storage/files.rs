use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// First free path in `dir` for a base name and extension: `"<base>.<ext>"`,
/// then `"<base> (1).<ext>"`, `"<base> (2).<ext>"`, and so on.
pub fn available_path(dir: &Path, base: &str, ext: &str) -> PathBuf {
    let mut candidate = dir.join(format!("{base}.{ext}"));
    let mut counter = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{base} ({counter}).{ext}"));
        counter += 1;
    }
    candidate
}

/// Create `path` as a new file and write all of `bytes` to it.
///
/// The file must not already exist (`create_new` keeps the existence check
/// and the creation atomic). A write failure removes the partial file, so a
/// failed save leaves no new file behind.
pub fn write_new(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(err) = file.write_all(bytes).and_then(|()| file.flush()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_available_path_unused_name() {
        let dir = TempDir::new().unwrap();
        let path = available_path(dir.path(), "report", "txt");
        assert_eq!(path, dir.path().join("report.txt"));
    }

    #[test]
    fn test_available_path_appends_counter_on_collision() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("report.txt"), "first").unwrap();

        let second = available_path(dir.path(), "report", "txt");
        assert_eq!(second, dir.path().join("report (1).txt"));

        fs::write(&second, "second").unwrap();
        let third = available_path(dir.path(), "report", "txt");
        assert_eq!(third, dir.path().join("report (2).txt"));
    }

    #[test]
    fn test_write_new_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_new(&path, b"hello").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_write_new_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();

        let result = write_new(&path, b"replacement");
        assert_eq!(
            result.unwrap_err().kind(),
            io::ErrorKind::AlreadyExists,
            "existing files must never be overwritten"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_new_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(write_new(&path, b"hello").is_err());
        assert!(!path.exists());
    }
}
