//! Editor configuration.
//!
//! Read from a `params.json`-style file whose `app` object lists the stage
//! paths to edit and the directory the game runtime loads them from:
//!
//! ```text
//! {"app": {"stage": ["stage01.json", "stage02.json"], "copy_path": "../app/assets/"}}
//! ```
//!
//! Other keys in the file belong to the editor UI and are ignored.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating an [`EditorConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file is not valid JSON or lacks the `app` keys.
    Json(serde_json::Error),
    /// `app.stage` is empty.
    NoStages,
    /// `app.copy_path` is empty.
    EmptyCopyPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "config JSON: {e}"),
            Self::NoStages => write!(f, "no stages configured"),
            Self::EmptyCopyPath => write!(f, "copy_path is empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ── EditorConfig ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct ParamsFile {
    app: EditorConfig,
}

/// Stage list and deploy directory for an editing session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Stage paths, in cycling order.
    #[serde(rename = "stage")]
    pub stages: Vec<PathBuf>,
    /// Directory that [`copy_all_to_app`](crate::EditorSession::copy_all_to_app)
    /// deploys stages into.
    pub copy_path: PathBuf,
}

impl EditorConfig {
    /// Build a config from its parts. Not validated.
    pub fn new<I, P>(stages: I, copy_path: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            stages: stages.into_iter().map(Into::into).collect(),
            copy_path: copy_path.into(),
        }
    }

    /// Parse and validate a `params.json` document.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubestage_session::EditorConfig;
    ///
    /// let config = EditorConfig::from_params_str(r#"{
    ///     "app": {"stage": ["a.json", "b.json"], "copy_path": "deploy/", "width": 1280}
    /// }"#).unwrap();
    /// assert_eq!(config.stages.len(), 2);
    /// assert_eq!(config.copy_destination("a.json".as_ref()), std::path::Path::new("deploy/a.json"));
    /// ```
    pub fn from_params_str(json: &str) -> Result<Self, ConfigError> {
        let params: ParamsFile = serde_json::from_str(json)?;
        params.app.validate()?;
        Ok(params.app)
    }

    /// Parse and validate a `params.json` document from bytes.
    pub fn from_params_slice(json: &[u8]) -> Result<Self, ConfigError> {
        let params: ParamsFile = serde_json::from_slice(json)?;
        params.app.validate()?;
        Ok(params.app)
    }

    /// Check structural invariants.
    ///
    /// There must be at least one stage, and `copy_path` must name
    /// something.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::NoStages);
        }
        if self.copy_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyCopyPath);
        }
        Ok(())
    }

    /// Where `stage` is deployed to.
    pub fn copy_destination(&self, stage: &Path) -> PathBuf {
        self.copy_path.join(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_app_section() {
        let config = EditorConfig::from_params_str(
            r#"{"window": {"w": 800}, "app": {"stage": ["s1.json"], "copy_path": "../app/assets/"}}"#,
        )
        .unwrap();
        assert_eq!(config, EditorConfig::new(["s1.json"], "../app/assets/"));
        assert_eq!(
            config.copy_destination(Path::new("s1.json")),
            Path::new("../app/assets/s1.json")
        );
    }

    #[test]
    fn missing_app_is_json_error() {
        let err = EditorConfig::from_params_str(r#"{"stage": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn rejects_empty_stage_list() {
        let err =
            EditorConfig::from_params_str(r#"{"app": {"stage": [], "copy_path": "out"}}"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::NoStages));
    }

    #[test]
    fn rejects_empty_copy_path() {
        let config = EditorConfig::new(["s1.json"], "");
        assert!(matches!(config.validate(), Err(ConfigError::EmptyCopyPath)));
    }

    #[test]
    fn slice_and_str_agree() {
        let json = r#"{"app": {"stage": ["a", "b"], "copy_path": "c"}}"#;
        assert_eq!(
            EditorConfig::from_params_slice(json.as_bytes()).unwrap(),
            EditorConfig::from_params_str(json).unwrap()
        );
    }
}
