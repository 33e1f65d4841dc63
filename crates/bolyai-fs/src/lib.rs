mod error;

pub use error::{Error, Result};

use std::io::{ErrorKind, Write};
use std::path::Path;

use error::from_io;

/// Whether anything is at `path`, including directories and dangling symlinks.
///
/// Only a missing entry is `false`. Any other failure to inspect the path,
/// such as an unreadable parent, is returned as an error.
pub fn exists(path: impl AsRef<Path>) -> Result<bool> {
    match path.as_ref().symlink_metadata() {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(from_io(e)),
    }
}

pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    std::fs::create_dir_all(path.as_ref()).map_err(from_io)
}

/// Write `content` to `path`, which must not exist yet.
///
/// The bytes are staged in a uniquely named hidden sibling and linked into
/// place, so the destination is either absent or complete. If something
/// appeared at `path` in the meantime it is left alone and
/// [`Error::AlreadyExists`] is returned. The staged file never outlives the
/// call.
pub fn write_new(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let file_name = path.file_name().ok_or(Error::NoFileName)?.to_string_lossy();
    if exists(path)? {
        return Err(Error::AlreadyExists);
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".part")
        .tempfile_in(parent)
        .map_err(from_io)?;
    staged.write_all(content).map_err(from_io)?;

    staged.persist_noclobber(path).map_err(|e| from_io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_new() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.pdf");
        write_new(&path, b"%PDF-1.4")?;
        assert_eq!(fs::read(&path)?, b"%PDF-1.4");
        assert_eq!(entries(dir.path()), ["a.pdf"]);
        Ok(())
    }

    #[test]
    fn test_write_new_keeps_existing() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.pdf");
        fs::write(&path, b"old")?;

        let err = write_new(&path, b"new").unwrap_err();
        assert!(matches!(err, Error::AlreadyExists));
        assert_eq!(fs::read(&path)?, b"old");
        assert_eq!(entries(dir.path()), ["a.pdf"]);
        Ok(())
    }

    #[test]
    fn test_write_new_missing_parent() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing").join("a.pdf");
        let err = write_new(&path, b"data").unwrap_err();
        assert!(matches!(err, Error::NotFound));
        assert!(!exists(&path)?);
        Ok(())
    }

    #[test]
    fn test_write_new_empty_content() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty");
        write_new(&path, b"")?;
        assert!(fs::read(&path)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_write_new_ignores_leftover_staging_entries() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.pdf");
        fs::create_dir(dir.path().join(".a.pdf.part"))?;
        fs::write(dir.path().join(".a.pdf.tmp.part"), b"stale")?;

        write_new(&path, b"new")?;
        assert_eq!(fs::read(&path)?, b"new");
        assert_eq!(entries(dir.path()), [".a.pdf.part", ".a.pdf.tmp.part", "a.pdf"]);
        Ok(())
    }

    #[test]
    fn test_write_new_without_file_name() {
        assert!(matches!(write_new("/", b"data"), Err(Error::NoFileName)));
    }

    #[test]
    fn test_exists_counts_directories() -> Result<()> {
        let dir = tempdir()?;
        let sub = dir.path().join("sub");
        assert!(!exists(&sub)?);
        ensure_dir(&sub)?;
        ensure_dir(&sub)?;
        assert!(exists(&sub)?);
        Ok(())
    }

    #[test]
    fn test_exists_reports_uninspectable_paths() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("a.pdf");
        fs::write(&file, b"pdf")?;

        // A regular file cannot have children: ENOTDIR, not ENOENT.
        assert!(matches!(exists(file.join("b.pdf")), Err(Error::Io(_))));
        assert!(matches!(write_new(file.join("b.pdf"), b"x"), Err(Error::Io(_))));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_counts_dangling_symlinks() -> Result<()> {
        let dir = tempdir()?;
        let link = dir.path().join("a.pdf");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link)?;
        assert!(exists(&link)?);
        assert!(matches!(write_new(&link, b"x"), Err(Error::AlreadyExists)));
        Ok(())
    }
}
