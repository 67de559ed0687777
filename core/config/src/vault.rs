//! Per-vault config at `<vault_dir>/vault.yaml`.
//!
//! These functions take the vault directory, not the root. They do not
//! create the directory and do not compare `cfg.name` with its name.

use std::path::Path;

use crate::layout;
use crate::record::VaultConfig;
use crate::store::{self, WriteMode};
use secretkeep_common::Result;

/// Load the config of the vault stored in `vault_dir`.
///
/// # Errors
/// - `Error::NotFound` if `vault.yaml` is absent
/// - `Error::Read` / `Error::Deserialization` otherwise
pub fn load(vault_dir: &Path) -> Result<VaultConfig> {
    store::load_record(&layout::vault_config_path(vault_dir))
}

/// Save `cfg` into `vault_dir`, replacing any existing `vault.yaml`.
pub fn save(vault_dir: &Path, cfg: &VaultConfig, mode: WriteMode) -> Result<()> {
    store::save_record(&layout::vault_config_path(vault_dir), cfg, mode)
}
