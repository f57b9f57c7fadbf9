//! Editing workflow around cubestage documents.
//!
//! An [`EditorSession`] owns one [`StageDocument`](cubestage_grid::StageDocument)
//! at a time, loaded from one of the stage paths listed in an
//! [`EditorConfig`]. All file traffic goes through a [`StageStore`], so the
//! same session logic runs against the real filesystem ([`FsStore`]) or an
//! in-memory store in tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use config::{ConfigError, EditorConfig};
pub use error::SessionError;
pub use session::{copy_stages, EditorSession};
pub use store::{FsStore, StageStore};
