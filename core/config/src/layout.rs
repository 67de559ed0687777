//! Canonical paths inside a configuration root.
//!
//! These functions do no I/O and never fail. Vault names are joined as-is;
//! validate untrusted names with [`VaultName`](secretkeep_common::VaultName)
//! before resolving them.

use std::path::{Path, PathBuf};

/// Directory name used for the root inside a project or home directory.
pub const DEFAULT_ROOT_DIRNAME: &str = ".secrets";

/// Global configuration file name in the root.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Per-vault configuration file name inside each vault directory.
pub const VAULT_CONFIG_FILENAME: &str = "vault.yaml";

/// Container for vault directories.
pub const VAULTS_DIRNAME: &str = "vaults";

/// Container for key material.
pub const KEYS_DIRNAME: &str = "keys";

/// `<root>/config.yaml`
pub fn global_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILENAME)
}

/// `<root>/vaults`
pub fn vaults_dir(root: &Path) -> PathBuf {
    root.join(VAULTS_DIRNAME)
}

/// `<root>/vaults/<vault_name>`
pub fn vault_dir(root: &Path, vault_name: &str) -> PathBuf {
    vaults_dir(root).join(vault_name)
}

/// `<vault_dir>/vault.yaml`
pub fn vault_config_path(vault_dir: &Path) -> PathBuf {
    vault_dir.join(VAULT_CONFIG_FILENAME)
}

/// `<root>/keys`
pub fn keys_dir(root: &Path) -> PathBuf {
    root.join(KEYS_DIRNAME)
}
