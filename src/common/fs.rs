//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};

/// Create the parent directory of `path` (and its ancestors) if missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    fs::create_dir_all(parent).map_err(|e| {
        fs_error::io_error(format!(
            "Failed to create directory {}: {e}",
            parent.display()
        ))
    })
}

/// Write `content` to `path` atomically
///
/// Content goes to a temporary file in the destination directory first and is
/// then renamed over `path`, so readers see either the old file or the new one.
/// The result has the mode a plain create would give it: an existing file keeps
/// its permissions, a new one gets 0666 minus the umask.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        create_temp_in(dir).map_err(|e| fs_error::write_failed(path, e.to_string()))?;

    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| fs_error::write_failed(path, e.to_string()))?;
    }

    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| fs_error::write_failed(path, e.to_string()))?;

    tmp.persist(path)
        .map_err(|e| fs_error::write_failed(path, e.error.to_string()))?;

    Ok(())
}

#[cfg(unix)]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The mode passed at creation is filtered through the umask.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c/latest-mac.yml");

        ensure_parent_dir(&target).unwrap();

        assert!(temp.path().join("a/b/c").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_ensure_parent_dir_bare_filename() {
        assert!(ensure_parent_dir(Path::new("latest-mac.yml")).is_ok());
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("latest-mac.yml");
        fs::write(&target, "old content that is much longer than the new one\n").unwrap();

        write_atomic(&target, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
        let leftovers = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_honours_umask() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let reference = temp.path().join("reference.yml");
        fs::write(&reference, "x").unwrap();
        let target = temp.path().join("latest-mac.yml");

        write_atomic(&target, "version: 1.0.0\n").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&target), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("latest-mac.yml");
        fs::write(&target, "old\n").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&target, "new\n").unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
    }

    #[test]
    fn test_write_atomic_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("missing/latest-mac.yml");

        let err = write_atomic(&target, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
