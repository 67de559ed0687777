//! Configuration persistence for secretkeep.
//!
//! This module provides:
//! - Canonical on-disk paths for the root, vaults and keys directories
//! - YAML encoding of the global and per-vault configuration records
//! - Load/save of those records with owner-only permissions
//! - Vault discovery by inspecting the `vaults/` container
//!
//! # Layout
//! ```text
//! <root>/
//!   config.yaml
//!   keys/
//!   vaults/
//!     <name>/
//!       vault.yaml
//! ```
//!
//! All operations are synchronous and take the root (or vault directory)
//! explicitly, so several roots can be used side by side.

pub mod codec;
pub mod global;
pub mod index;
pub mod layout;
pub mod record;
pub mod root;
pub mod store;
pub mod vault;

pub use codec::CodecError;
pub use layout::{
    CONFIG_FILENAME, DEFAULT_ROOT_DIRNAME, KEYS_DIRNAME, VAULTS_DIRNAME, VAULT_CONFIG_FILENAME,
};
pub use record::{ConfigRecord, GlobalConfig, VaultConfig, CONFIG_VERSION};
pub use root::ConfigRoot;
pub use store::WriteMode;

pub use secretkeep_common::{Error, Resource, Result, VaultName};
