use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use crate::report::model::{ArtifactHash, ArtifactInfo};

/// A module file loaded for auditing.
#[derive(Debug, Clone)]
pub struct ModuleArtifact {
    pub path: String,
    pub bytes: Vec<u8>,
    /// Hex SHA-256 of `bytes`.
    pub sha256: String,
}

impl ModuleArtifact {
    pub fn from_bytes(path: impl Into<String>, bytes: Vec<u8>) -> Self {
        let sha256 = hex::encode(Sha256::digest(&bytes));
        Self {
            path: path.into(),
            bytes,
            sha256,
        }
    }

    /// Report-facing metadata. Drops the bytes.
    pub fn info(&self) -> ArtifactInfo {
        ArtifactInfo {
            path: Some(self.path.clone()),
            size_bytes: self.bytes.len() as u64,
            hash: ArtifactHash {
                algorithm: "sha256".to_string(),
                value: self.sha256.clone(),
            },
        }
    }
}

/// Read a module from disk. Identity depends only on file contents.
pub fn read_module(path: &Path) -> Result<ModuleArtifact> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read module: {}", path.display()))?;
    Ok(ModuleArtifact::from_bytes(path.display().to_string(), bytes))
}
