//! In-memory [`StageStore`].

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use cubestage_session::StageStore;

/// A [`StageStore`] backed by a map from path to file contents.
///
/// Paths are used verbatim; no normalization is applied.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, Vec<u8>>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Place a file without counting it as a write.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }

    /// File contents as UTF-8 text, for assertions.
    pub fn text(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.get(path).and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of [`StageStore::write`] and [`StageStore::copy`] calls that
    /// succeeded.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    )
}

impl StageStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn copy(&mut self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<()> {
        let contents = self.files.get(src).cloned().ok_or_else(|| not_found(src))?;
        if !overwrite && self.files.contains_key(dst) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", dst.display()),
            ));
        }
        self.files.insert(dst.to_path_buf(), contents);
        self.writes += 1;
        Ok(())
    }
}
