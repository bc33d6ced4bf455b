//! Dataset selection and loading.
//!
//! A custom `--input` file wins over the configured default dataset. Either
//! way the file is read and parsed into an unchecked JSON document; validation
//! is left to the pipeline.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lens_config::GeneralConfig;
use lens_report::Dataset;
use serde_json::Value;

/// Where the document being reported on came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Custom(PathBuf),
    Default(PathBuf),
}

impl DatasetSource {
    #[must_use]
    pub fn select(input: Option<&str>, general: &GeneralConfig) -> Self {
        match input {
            Some(path) => Self::Custom(PathBuf::from(path)),
            None => Self::Default(PathBuf::from(&general.default_dataset)),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Custom(path) | Self::Default(path) => path,
        }
    }

    /// Read and parse the selected file.
    pub fn load(&self) -> anyhow::Result<Dataset> {
        let document = read_document(self.path())?;
        tracing::debug!(source = ?self, "loaded session document");
        Ok(Dataset::Raw(document))
    }
}

/// Read a JSON document from disk without checking its shape.
pub fn read_document(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
