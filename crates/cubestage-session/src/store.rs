//! Stage file storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Where stage files live.
///
/// Paths are the relative stage paths from an
/// [`EditorConfig`](crate::EditorConfig); each store decides how to
/// resolve them.
pub trait StageStore {
    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file at `path` with `bytes`.
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// Copy `src` to `dst`.
    ///
    /// Fails with [`io::ErrorKind::AlreadyExists`] if `dst` exists and
    /// `overwrite` is false.
    fn copy(&mut self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<()>;
}

/// A [`StageStore`] on the local filesystem.
///
/// Relative paths resolve against `root`; absolute paths are used as-is.
/// Parent directories are created on write and copy.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use cubestage_session::{FsStore, StageStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FsStore::new(dir.path());
/// store.write(Path::new("nested/a.json"), b"{}").unwrap();
/// assert_eq!(store.read(Path::new("nested/a.json")).unwrap(), b"{}");
/// ```
#[derive(Clone, Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// A store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory relative paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` against the root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn create_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

impl StageStore for FsStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let full = self.resolve(path);
        create_parent(&full)?;
        fs::write(&full, bytes)?;
        debug!("wrote {} bytes to {}", bytes.len(), full.display());
        Ok(())
    }

    fn copy(&mut self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<()> {
        let from = self.resolve(src);
        let to = self.resolve(dst);
        if !overwrite && to.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        create_parent(&to)?;
        let n = fs::copy(&from, &to)?;
        debug!("copied {} -> {} ({n} bytes)", from.display(), to.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_creates_parents() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::new(dir.path());
        store.write(Path::new("a/b/c.json"), b"[]").unwrap();
        assert!(dir.path().join("a/b/c.json").is_file());
        assert_eq!(store.read(Path::new("a/b/c.json")).unwrap(), b"[]");
    }

    #[test]
    fn read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let store = FsStore::new(dir.path());
        let err = store.read(Path::new("nope.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn copy_respects_overwrite() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::new(dir.path());
        store.write(Path::new("src.json"), b"new").unwrap();
        store.write(Path::new("out/dst.json"), b"old").unwrap();

        let err = store
            .copy(Path::new("src.json"), Path::new("out/dst.json"), false)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(store.read(Path::new("out/dst.json")).unwrap(), b"old");

        store
            .copy(Path::new("src.json"), Path::new("out/dst.json"), true)
            .unwrap();
        assert_eq!(store.read(Path::new("out/dst.json")).unwrap(), b"new");
    }

    #[test]
    fn copy_creates_destination_dirs() {
        let dir = tempdir().unwrap();
        let mut store = FsStore::new(dir.path());
        store.write(Path::new("s.json"), b"x").unwrap();
        store
            .copy(Path::new("s.json"), Path::new("deploy/assets/s.json"), false)
            .unwrap();
        assert!(dir.path().join("deploy/assets/s.json").is_file());
    }
}
