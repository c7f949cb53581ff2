use crate::error::{CliError, Result};
use hpfold::core::scoring::ContactPolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSearchConfig {
    #[serde(rename = "contact-policy")]
    pub contact_policy: Option<ContactPolicy>,
    #[serde(rename = "bound-pruning")]
    pub bound_pruning: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileEnumerateConfig {
    #[serde(rename = "show-best")]
    pub show_best: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub search: Option<FileSearchConfig>,
    pub enumerate: Option<FileEnumerateConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
