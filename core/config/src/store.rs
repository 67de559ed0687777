//! Reading and writing record files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::codec::{self, CodecError};
use crate::record::ConfigRecord;
use secretkeep_common::{Error, Result};

/// How a record file is replaced on save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a temporary file next to the target and rename it into place.
    /// Readers see either the old or the new content, never a partial file.
    #[default]
    Atomic,
    /// Truncate and rewrite the target directly. A crash mid-write can
    /// leave a partial file.
    InPlace,
}

/// Read and decode the record at `path`.
///
/// # Errors
/// - `Error::NotFound` if the file does not exist
/// - `Error::Read` for any other I/O failure
/// - `Error::Deserialization` if the content is not a valid record
pub fn load_record<R: ConfigRecord>(path: &Path) -> Result<R> {
    debug!("Loading {} from {}", R::RESOURCE, path.display());

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound {
                resource: R::RESOURCE,
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(Error::Read {
                resource: R::RESOURCE,
                path: path.to_path_buf(),
                source,
            });
        }
    };

    codec::decode(&bytes).map_err(|e| codec_error::<R>(path, e))
}

/// Encode `record` and write it to `path`, replacing existing content.
///
/// The parent directory must already exist. The resulting file is readable
/// and writable by the owner only.
///
/// # Errors
/// - `Error::Serialization` if the record cannot be encoded
/// - `Error::Write` for any I/O failure
pub fn save_record<R: ConfigRecord>(path: &Path, record: &R, mode: WriteMode) -> Result<()> {
    let bytes = codec::encode(record).map_err(|e| codec_error::<R>(path, e))?;

    debug!(
        "Saving {} to {} ({} bytes, {:?})",
        R::RESOURCE,
        path.display(),
        bytes.len(),
        mode
    );

    let written = match mode {
        WriteMode::Atomic => write_atomic(path, &bytes),
        WriteMode::InPlace => write_in_place(path, &bytes),
    };

    written.map_err(|source| Error::Write {
        resource: R::RESOURCE,
        path: path.to_path_buf(),
        source,
    })
}

fn codec_error<R: ConfigRecord>(path: &Path, err: CodecError) -> Error {
    match err {
        CodecError::Encode(source) => Error::Serialization {
            resource: R::RESOURCE,
            path: path.to_path_buf(),
            source,
        },
        CodecError::Decode(source) => Error::Deserialization {
            resource: R::RESOURCE,
            path: path.to_path_buf(),
            source,
        },
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Same directory as the target so the rename never crosses filesystems.
    let mut tmp = NamedTempFile::new_in(dir)?;
    restrict_permissions(tmp.as_file())?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_in_place(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    // An existing file keeps its old mode unless tightened explicitly.
    restrict_permissions(&file)?;
    file.write_all(bytes)?;
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}
