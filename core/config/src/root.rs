//! Handle on one configuration root directory.

use std::path::{Path, PathBuf};

use crate::layout::{self, DEFAULT_ROOT_DIRNAME};
use crate::record::{GlobalConfig, VaultConfig};
use crate::store::WriteMode;
use crate::{global, index, vault};
use secretkeep_common::Result;

/// A configuration root and the write mode used when saving under it.
///
/// The handle holds no open resources; every call touches the filesystem
/// afresh. Creating the root, `vaults/` and vault directories is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRoot {
    root: PathBuf,
    write_mode: WriteMode,
}

impl ConfigRoot {
    /// Use `root` directly as the configuration root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_mode: WriteMode::default(),
        }
    }

    /// The `.secrets` root inside a project directory.
    pub fn in_project(project_dir: impl AsRef<Path>) -> Self {
        Self::new(project_dir.as_ref().join(DEFAULT_ROOT_DIRNAME))
    }

    /// The `.secrets` root inside the user's home directory, if one is known.
    pub fn in_home() -> Option<Self> {
        dirs::home_dir().map(Self::in_project)
    }

    /// Use `mode` for subsequent saves.
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Get root path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Get the write mode used by `save_global` and `save_vault`.
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Path of `config.yaml` under this root.
    pub fn global_config_path(&self) -> PathBuf {
        layout::global_config_path(&self.root)
    }

    /// Path of the `vaults/` container.
    pub fn vaults_dir(&self) -> PathBuf {
        layout::vaults_dir(&self.root)
    }

    /// Directory of the vault named `vault_name`. The name is not validated.
    pub fn vault_dir(&self, vault_name: &str) -> PathBuf {
        layout::vault_dir(&self.root, vault_name)
    }

    /// Path of `vault.yaml` for the vault named `vault_name`.
    pub fn vault_config_path(&self, vault_name: &str) -> PathBuf {
        layout::vault_config_path(&self.vault_dir(vault_name))
    }

    /// Path of the `keys/` container.
    pub fn keys_dir(&self) -> PathBuf {
        layout::keys_dir(&self.root)
    }

    /// Load `config.yaml`.
    pub fn load_global(&self) -> Result<GlobalConfig> {
        global::load(&self.root)
    }

    /// Save `config.yaml`.
    pub fn save_global(&self, cfg: &GlobalConfig) -> Result<()> {
        global::save(&self.root, cfg, self.write_mode)
    }

    /// Load the config of the vault named `vault_name`.
    pub fn load_vault(&self, vault_name: &str) -> Result<VaultConfig> {
        vault::load(&self.vault_dir(vault_name))
    }

    /// Save `cfg` as the config of the vault named `vault_name`.
    ///
    /// The vault directory must already exist.
    pub fn save_vault(&self, vault_name: &str, cfg: &VaultConfig) -> Result<()> {
        vault::save(&self.vault_dir(vault_name), cfg, self.write_mode)
    }

    /// See [`index::exists`].
    pub fn vault_exists(&self, vault_name: &str) -> bool {
        index::exists(&self.root, vault_name)
    }

    /// See [`index::list`].
    pub fn list_vaults(&self) -> Result<Vec<String>> {
        index::list(&self.root)
    }
}
