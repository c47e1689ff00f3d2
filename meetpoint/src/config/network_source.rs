use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{NetworkError, TransitLine, TransitNetwork};

/// where the transit line table comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum NetworkSource {
    /// the network bundled with this crate
    #[default]
    Bundled,
    /// a .toml or .json file with a `lines` table
    File { path: String },
    /// lines declared directly in the configuration
    Inline { lines: Vec<TransitLine> },
}

impl NetworkSource {
    pub fn load(&self) -> Result<TransitNetwork, NetworkError> {
        match self {
            NetworkSource::Bundled => TransitNetwork::bundled(),
            NetworkSource::File { path } => TransitNetwork::try_from(Path::new(path)),
            NetworkSource::Inline { lines } => TransitNetwork::new(lines.clone()),
        }
    }
}

impl std::fmt::Display for NetworkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkSource::Bundled => write!(f, "bundled"),
            NetworkSource::File { path } => write!(f, "file '{path}'"),
            NetworkSource::Inline { lines } => write!(f, "inline ({} lines)", lines.len()),
        }
    }
}
