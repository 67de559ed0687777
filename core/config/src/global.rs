//! The single installation-wide config at `<root>/config.yaml`.

use std::path::Path;

use crate::layout;
use crate::record::GlobalConfig;
use crate::store::{self, WriteMode};
use secretkeep_common::Result;

/// Load the global config from `root`.
///
/// # Errors
/// - `Error::NotFound` if the root has not been initialized
/// - `Error::Read` / `Error::Deserialization` otherwise
pub fn load(root: &Path) -> Result<GlobalConfig> {
    store::load_record(&layout::global_config_path(root))
}

/// Save the global config into `root`, replacing any existing file.
///
/// The root directory itself must exist.
pub fn save(root: &Path, cfg: &GlobalConfig, mode: WriteMode) -> Result<()> {
    store::save_record(&layout::global_config_path(root), cfg, mode)
}
