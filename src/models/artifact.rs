use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{PreflightError, PreflightResult};

/// Project files inspected during an audit run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Container build file
    BuildDescriptor,
    /// Web-server configuration
    ServerConfig,
    /// Client-side config source
    ClientConfig,
    /// Application entry file
    EntryUi,
}

impl ArtifactKind {
    /// All artifacts, in load order
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::BuildDescriptor,
        ArtifactKind::ServerConfig,
        ArtifactKind::ClientConfig,
        ArtifactKind::EntryUi,
    ];

    /// Path of this artifact relative to the project root
    pub fn relative_path(&self) -> &'static str {
        match self {
            ArtifactKind::BuildDescriptor => "Dockerfile",
            ArtifactKind::ServerConfig => "nginx.conf",
            ArtifactKind::ClientConfig => "src/supabaseClient.ts",
            ArtifactKind::EntryUi => "index.tsx",
        }
    }
}

/// An artifact's full text, held in memory for the duration of the audit
#[derive(Debug)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    /// Read the artifact under `root` in one shot, as UTF-8 text
    pub fn load(root: &Path, kind: ArtifactKind) -> PreflightResult<Self> {
        let path = root.join(kind.relative_path());
        let content = fs::read_to_string(&path).map_err(|source| {
            PreflightError::ArtifactUnreadable {
                path: path.clone(),
                source,
            }
        })?;

        debug!("Loaded {} ({} bytes)", path.display(), content.len());

        Ok(Self {
            kind,
            path,
            content,
        })
    }
}
