//! The shard directory layout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use erasure_coding::Params;
use serde::{Deserialize, Serialize};

/// The manifest file name within the shard directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// The description of an encoded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    /// The coding parameters used.
    pub params: Params,
    /// The length of the encoded file, to cut the padding off.
    pub data_len: u64,
}

impl Manifest {
    /// Read the manifest from the shard directory.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let raw = std::fs::read(&path)
            .with_context(|| format!("unable to read manifest {}", path.display()))?;
        let manifest: Self = serde_json::from_slice(&raw)
            .with_context(|| format!("invalid manifest {}", path.display()))?;
        manifest.params.validate()?;
        Ok(manifest)
    }

    /// Write the manifest into the shard directory.
    pub fn store(&self, dir: &Path) -> anyhow::Result<()> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let raw = serde_json::to_vec_pretty(self)?;
        std::fs::write(&path, raw)
            .with_context(|| format!("unable to write manifest {}", path.display()))
    }
}

/// The path of the shard file with the given global index.
pub fn shard_path(dir: &Path, index: u16) -> PathBuf {
    dir.join(format!("shard-{index}.bin"))
}
