//! Vault discovery under `<root>/vaults`.
//!
//! `list` reports entries whose own type is a directory. `exists` follows
//! symlinks, so a link to a directory exists without being listed.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::layout;
use secretkeep_common::{Error, Resource, Result};

/// Check whether `vault_name` is a vault directory under `root`.
///
/// Best-effort: any filesystem error, including a missing root or a
/// permission problem, yields `false`. Use [`try_exists`] to tell these apart.
pub fn exists(root: &Path, vault_name: &str) -> bool {
    match try_exists(root, vault_name) {
        Ok(found) => found,
        Err(e) => {
            debug!("Treating vault '{}' as absent: {}", vault_name, e);
            false
        }
    }
}

/// Check whether `vault_name` is a vault directory under `root`, surfacing
/// errors other than absence.
///
/// # Errors
/// - `Error::Read` if the entry cannot be inspected for a reason other than
///   it not existing
pub fn try_exists(root: &Path, vault_name: &str) -> Result<bool> {
    let vault_dir = layout::vault_dir(root, vault_name);
    match fs::metadata(&vault_dir) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if is_absent(&e) => Ok(false),
        Err(source) => Err(Error::Read {
            resource: Resource::VaultDirectory,
            path: vault_dir,
            source,
        }),
    }
}

/// List the names of all vaults under `root`, in directory order.
///
/// Only entries that are themselves directories count; regular files,
/// symlinks and other entry types are left out. Directories whose name is
/// not valid UTF-8 are also left out, since they cannot be addressed
/// through the `&str` path helpers.
///
/// Returns an empty list when the vaults container does not exist.
///
/// # Errors
/// - `Error::Read` if the container exists but cannot be read, or an entry's
///   type cannot be determined
pub fn list(root: &Path) -> Result<Vec<String>> {
    let vaults_dir = layout::vaults_dir(root);
    let read_err = |source: io::Error| Error::Read {
        resource: Resource::VaultDirectory,
        path: vaults_dir.clone(),
        source,
    };

    let entries = match fs::read_dir(&vaults_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No vaults container at {}", vaults_dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(read_err(e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(read_err)?;

        if !entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!("Skipping vault directory with non-UTF-8 name {:?}", raw),
        }
    }

    debug!("Found {} vaults in {}", names.len(), vaults_dir.display());
    Ok(names)
}

fn is_absent(err: &io::Error) -> bool {
    // A file where a directory component was expected also means "no vault".
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
