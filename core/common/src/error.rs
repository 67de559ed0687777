//! Common error types for secretkeep.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The on-disk resource an operation was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The root `config.yaml` record.
    GlobalConfig,
    /// A per-vault `vault.yaml` record.
    VaultConfig,
    /// The `vaults/` container or one of its entries.
    VaultDirectory,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Resource::GlobalConfig => "global config",
            Resource::VaultConfig => "vault config",
            Resource::VaultDirectory => "vault directory",
        };
        f.write_str(label)
    }
}

/// Top-level error type for configuration operations.
///
/// Every filesystem and codec failure records which resource was involved
/// and the path that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// The expected file does not exist.
    #[error("{resource} not found at {}", path.display())]
    NotFound { resource: Resource, path: PathBuf },

    /// Reading from disk failed for a reason other than absence.
    #[error("failed to read {resource} at {}: {source}", path.display())]
    Read {
        resource: Resource,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to disk failed.
    #[error("failed to write {resource} at {}: {source}", path.display())]
    Write {
        resource: Resource,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded.
    #[error("failed to serialize {resource} for {}: {source}", path.display())]
    Serialization {
        resource: Resource,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// File content did not match the expected record shape.
    #[error("failed to parse {resource} at {}: {source}", path.display())]
    Deserialization {
        resource: Resource,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns true if this error reports a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// The path the failing operation was working on, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::NotFound { path, .. }
            | Error::Read { path, .. }
            | Error::Write { path, .. }
            | Error::Serialization { path, .. }
            | Error::Deserialization { path, .. } => Some(path),
            Error::InvalidInput(_) => None,
        }
    }
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
