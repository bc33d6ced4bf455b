//! General application configuration.

use serde::{Deserialize, Serialize};

/// Dataset read when no `--input` is given.
fn default_dataset() -> String {
    "session.json".to_string()
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path of the bundled session document used when no input file is given.
    #[serde(default = "default_dataset")]
    pub default_dataset: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_dataset: default_dataset(),
            pretty: default_pretty(),
        }
    }
}
