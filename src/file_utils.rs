//! File reading utilities for report generation
//!
//! Every file in the report needs three things: its size on disk, its
//! content as UTF-8 text, and a tag for the opening code fence.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ReadError;

/// Size of a file in bytes, stat'ed at the time of the call.
///
/// Follows symlinks. A broken symlink falls back to the size of the link
/// itself. If neither stat succeeds the error of the first one is returned.
pub fn file_size(path: &Path) -> io::Result<u64> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.len()),
        Err(e) => fs::symlink_metadata(path).map(|m| m.len()).map_err(|_| e),
    }
}

/// Read a file fully into memory as UTF-8 text.
///
/// Content is returned verbatim: no BOM stripping, no newline translation.
/// When `max_size` is set, files larger than it are rejected before reading.
/// FIFOs, sockets and devices are rejected without being opened.
pub fn read_text_file(path: &Path, max_size: Option<u64>) -> Result<String, ReadError> {
    if let Ok(metadata) = path.metadata() {
        if !metadata.is_file() {
            return Err(ReadError::NotRegular);
        }
        let size = metadata.len();
        if let Some(limit) = max_size {
            if size > limit {
                return Err(ReadError::TooLarge { size, limit });
            }
        }
    }

    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// Tag for the opening fence: the characters after the last '.' of the name.
///
/// Leading dots do not start an extension, so `.gitignore` has no tag.
/// Case is preserved.
pub fn fence_tag(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    let rest = &file_name[stem_start..];
    match rest.rfind('.') {
        Some(idx) => &rest[idx + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_file_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.rs");
        fs::write(&file_path, "fn main() {}").unwrap();

        let content = read_text_file(&file_path, None).unwrap();
        assert_eq!(content, "fn main() {}");
    }

    #[test]
    fn test_read_text_file_nonexistent() {
        let result = read_text_file(Path::new("/nonexistent/file.rs"), None);
        assert!(matches!(result, Err(ReadError::Io(_))));
    }

    #[test]
    fn test_invalid_utf8_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("invalid.bin");
        fs::write(&file_path, [0xFF, 0xFE, 0x00, 0x01]).unwrap();

        let result = read_text_file(&file_path, None);
        assert!(
            matches!(result, Err(ReadError::Decode(_))),
            "file with invalid UTF-8 should be a decode error"
        );
    }

    #[test]
    fn test_content_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("crlf.txt");

        // CRLF line endings and a BOM survive untouched
        let content = "\u{FEFF}line one\r\nline two\r\n";
        fs::write(&file_path, content).unwrap();

        assert_eq!(read_text_file(&file_path, None).unwrap(), content);
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("empty.rs");
        fs::write(&file_path, "").unwrap();

        assert_eq!(read_text_file(&file_path, None).unwrap(), "");
        assert_eq!(file_size(&file_path).unwrap(), 0);
    }

    #[test]
    fn test_file_at_max_size_boundary() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("boundary.txt");
        let limit = 1_000u64;

        // Exactly at the limit is still read (uses > not >=)
        fs::write(&file_path, "x".repeat(limit as usize)).unwrap();
        assert!(read_text_file(&file_path, Some(limit)).is_ok());

        fs::write(&file_path, "x".repeat(limit as usize + 1)).unwrap();
        match read_text_file(&file_path, Some(limit)) {
            Err(ReadError::TooLarge { size, limit: l }) => {
                assert_eq!(size, limit + 1);
                assert_eq!(l, limit);
            }
            other => panic!("expected TooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_file_size_reports_bytes() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("a.txt");
        // Multi-byte characters count in bytes, not chars
        fs::write(&file_path, "héllo").unwrap();
        assert_eq!(file_size(&file_path).unwrap(), 6);
    }

    #[test]
    fn test_file_size_missing_file() {
        let err = file_size(Path::new("/nonexistent/file.rs")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_size_without_search_permission() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("a.txt"), "abc").unwrap();

        // Listable but not searchable: entries cannot be stat'ed
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
        let enforced = fs::metadata(locked.join("a.txt")).is_err();
        let result = file_size(&locked.join("a.txt"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if enforced {
            assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
        } else {
            assert_eq!(result.unwrap(), 3);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_handling() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let target_path = dir.path().join("target.rs");
        let symlink_path = dir.path().join("link.rs");
        fs::write(&target_path, "fn main() {}").unwrap();
        symlink(&target_path, &symlink_path).unwrap();

        assert_eq!(read_text_file(&symlink_path, None).unwrap(), "fn main() {}");
        assert_eq!(file_size(&symlink_path).unwrap(), 12);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let symlink_path = dir.path().join("broken_link.rs");
        symlink("nonexistent.rs", &symlink_path).unwrap();

        assert!(read_text_file(&symlink_path, None).is_err());
        // Size of the link itself: the length of its target string
        assert_eq!(
            file_size(&symlink_path).unwrap(),
            "nonexistent.rs".len() as u64
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_fifo_is_not_opened() {
        let dir = TempDir::new().unwrap();
        let fifo_path = dir.path().join("pipe");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo_path)
            .status();
        if !status.is_ok_and(|s| s.success()) {
            return;
        }

        // Opening a FIFO for reading would block forever
        assert!(matches!(
            read_text_file(&fifo_path, None),
            Err(ReadError::NotRegular)
        ));
    }

    #[test]
    fn test_fence_tag() {
        assert_eq!(fence_tag("main.rs"), "rs");
        assert_eq!(fence_tag("archive.tar.gz"), "gz");
        assert_eq!(fence_tag("Makefile"), "");
        assert_eq!(fence_tag(".gitignore"), "");
        assert_eq!(fence_tag("..hidden"), "");
        assert_eq!(fence_tag(".env.local"), "local");
        assert_eq!(fence_tag("trailing."), "");
        assert_eq!(fence_tag("README.MD"), "MD");
    }
}
