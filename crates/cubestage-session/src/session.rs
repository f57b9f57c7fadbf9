//! The editing session: one loaded stage out of a configured list.

use std::path::Path;

use cubestage_codec::{decode_slice, encode_vec_pretty};
use cubestage_grid::StageDocument;
use log::info;

use crate::config::EditorConfig;
use crate::error::SessionError;
use crate::store::StageStore;

/// Drives editing of the stages listed in an [`EditorConfig`].
///
/// Exactly one stage is loaded at a time. Switching stages discards the
/// current document without writing it; call
/// [`write_current`](Self::write_current) first to keep edits.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use cubestage_session::{EditorConfig, EditorSession, FsStore, StageStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FsStore::new(dir.path());
/// store.write(
///     Path::new("s1.json"),
///     br#"{"body": [[0, 0]], "color": [1, 1, 1], "bg_color": [0, 0, 0]}"#,
/// ).unwrap();
///
/// let config = EditorConfig::new(["s1.json"], "deploy");
/// let mut session = EditorSession::open(config, store).unwrap();
/// session.document_mut().grid.toggle_item(1, 0);
/// session.write_current().unwrap();
/// session.reload().unwrap();
/// assert!(session.document().grid.is_item(1, 0));
/// ```
#[derive(Debug)]
pub struct EditorSession<S: StageStore> {
    config: EditorConfig,
    store: S,
    index: usize,
    document: StageDocument,
}

/// Copy every stage listed in `config` into its `copy_path`, overwriting.
///
/// Stage contents are never decoded, so a malformed stage is copied like
/// any other. Returns the number of stages copied. Stops at the first
/// failure.
///
/// # Errors
///
/// [`SessionError::Config`] if `config` is invalid, [`SessionError::Io`]
/// naming the source stage if a copy fails.
pub fn copy_stages<S: StageStore>(
    config: &EditorConfig,
    store: &mut S,
) -> Result<usize, SessionError> {
    config.validate()?;
    let mut copied = 0;
    for stage in &config.stages {
        let dst = config.copy_destination(stage);
        store
            .copy(stage, &dst, true)
            .map_err(|source| SessionError::Io {
                path: stage.clone(),
                source,
            })?;
        copied += 1;
    }
    info!("copied {copied} stages to {}", config.copy_path.display());
    Ok(copied)
}

fn load<S: StageStore>(store: &S, path: &Path) -> Result<StageDocument, SessionError> {
    let bytes = store.read(path).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_slice(&bytes).map_err(|source| SessionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl<S: StageStore> EditorSession<S> {
    /// Validate `config` and load its first stage.
    pub fn open(config: EditorConfig, store: S) -> Result<Self, SessionError> {
        config.validate()?;
        let document = load(&store, &config.stages[0])?;
        info!(
            "opened {} (1 of {})",
            config.stages[0].display(),
            config.stages.len()
        );
        Ok(Self {
            config,
            store,
            index: 0,
            document,
        })
    }

    /// Index of the loaded stage.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Path of the loaded stage.
    pub fn current_path(&self) -> &Path {
        &self.config.stages[self.index]
    }

    /// Number of configured stages.
    pub fn stage_count(&self) -> usize {
        self.config.stages.len()
    }

    /// The session configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The loaded document.
    pub fn document(&self) -> &StageDocument {
        &self.document
    }

    /// The loaded document, for editing.
    pub fn document_mut(&mut self) -> &mut StageDocument {
        &mut self.document
    }

    /// Load the stage at `index`, replacing the current document.
    ///
    /// On error the current stage stays loaded.
    pub fn load_stage(&mut self, index: usize) -> Result<(), SessionError> {
        let count = self.stage_count();
        let path = self
            .config
            .stages
            .get(index)
            .ok_or(SessionError::StageIndexOutOfRange { index, count })?;
        self.document = load(&self.store, path)?;
        self.index = index;
        info!("loaded {} ({} of {count})", path.display(), index + 1);
        Ok(())
    }

    /// Load the next stage, wrapping to the first.
    pub fn next_stage(&mut self) -> Result<(), SessionError> {
        self.load_stage((self.index + 1) % self.stage_count())
    }

    /// Load the previous stage, wrapping to the last.
    pub fn prev_stage(&mut self) -> Result<(), SessionError> {
        let count = self.stage_count();
        self.load_stage((self.index + count - 1) % count)
    }

    /// Re-read the current stage, discarding edits.
    pub fn reload(&mut self) -> Result<(), SessionError> {
        self.load_stage(self.index)
    }

    /// Reset every column of the loaded document.
    pub fn clear_stage(&mut self) {
        self.document.clear();
    }

    /// Validate the document and write it back to its stage path.
    ///
    /// Returns the number of variants `validate` stripped from holes.
    pub fn write_current(&mut self) -> Result<usize, SessionError> {
        let stripped = self.document.validate();
        let path = self.config.stages[self.index].clone();
        let bytes = encode_vec_pretty(&self.document).map_err(|source| SessionError::Encode {
            path: path.clone(),
            source,
        })?;
        self.store
            .write(&path, &bytes)
            .map_err(|source| SessionError::Io {
                path: path.clone(),
                source,
            })?;
        info!("wrote {} ({stripped} invalid variants stripped)", path.display());
        Ok(stripped)
    }

    /// Copy every configured stage into `copy_path`, overwriting.
    ///
    /// Stages are copied as stored; unsaved edits are not included.
    /// Returns the number of stages copied. Stops at the first failure.
    pub fn copy_all_to_app(&mut self) -> Result<usize, SessionError> {
        copy_stages(&self.config, &mut self.store)
    }
}
